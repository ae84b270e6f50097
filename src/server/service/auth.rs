use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginUserDto, RegisterUserDto, UserDto},
    server::{data::user::UserRepository, error::auth::AuthError, error::Error},
};

const MIN_PASSWORD_LENGTH: usize = 8;

/// A valid Argon2id PHC string verified against when no account matches the
/// submitted email, so that login takes the same time either way.
const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$\
    gZiV/M1gPc22ElAH/Jh1Hw$CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account with a freshly hashed password
    ///
    /// Fails with [`AuthError::EmailTaken`] when the email is already
    /// registered and with a validation error for malformed input.
    pub async fn register(&self, dto: RegisterUserDto) -> Result<UserDto, Error> {
        if !dto.email.contains('@') {
            return Err(AuthError::InvalidEmail(dto.email).into());
        }
        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort(MIN_PASSWORD_LENGTH).into());
        }

        let user_repository = UserRepository::new(self.db);
        if user_repository.find_by_email(&dto.email).await?.is_some() {
            return Err(AuthError::EmailTaken(dto.email).into());
        }

        let password = dto.password;
        let password_hash = spawn_blocking_password_task(move || hash_password(&password))
            .await?
            .map_err(Error::AuthError)?;

        let user = user_repository
            .create(&dto.email, &dto.name, &password_hash)
            .await?;

        Ok(user.into())
    }

    /// Verifies credentials and returns the matching user
    ///
    /// Unknown emails are verified against a dummy hash so that the response
    /// time does not reveal whether the email is registered. Both unknown
    /// emails and wrong passwords fail with [`AuthError::InvalidCredentials`].
    pub async fn login(&self, dto: LoginUserDto) -> Result<UserDto, Error> {
        let user_repository = UserRepository::new(self.db);
        let user = user_repository.find_by_email(&dto.email).await?;

        let expected_hash = user
            .as_ref()
            .map(|user| user.password_hash.clone())
            .unwrap_or_else(|| DUMMY_PASSWORD_HASH.to_string());

        let verified = spawn_blocking_password_task(move || {
            verify_password(&expected_hash, &dto.password)
        })
        .await?;

        match (verified, user) {
            (Ok(()), Some(user)) => Ok(user.into()),
            _ => Err(AuthError::InvalidCredentials.into()),
        }
    }
}

/// Runs a password hashing operation off the async runtime
async fn spawn_blocking_password_task<T, F>(task: F) -> Result<T, Error>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| Error::InternalError(format!("Password task panicked: {}", e)))
}

fn argon2() -> Result<Argon2<'static>, AuthError> {
    let params = Params::new(15000, 2, 1, None)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

fn verify_password(expected_hash: &str, password: &str) -> Result<(), AuthError> {
    let expected_hash =
        PasswordHash::new(expected_hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &expected_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
