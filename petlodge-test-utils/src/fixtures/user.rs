use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHasher, Version,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{constant::TEST_PASSWORD, error::TestError};

pub struct UserFixture<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixture<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a user with the given email and a hash of [`TEST_PASSWORD`]
    ///
    /// Hashing uses deliberately cheap parameters to keep the test suite
    /// fast; production hashing parameters live in the application.
    pub async fn insert_user(&self, email: &str) -> Result<entity::petlodge_user::Model, TestError> {
        let password_hash = hash_test_password()?;

        let user = entity::petlodge_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set("Test User".to_string()),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }
}

fn hash_test_password() -> Result<String, TestError> {
    let salt = SaltString::generate(&mut OsRng);
    let params =
        Params::new(1024, 1, 1, None).map_err(|e| TestError::PasswordHash(e.to_string()))?;

    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(TEST_PASSWORD.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| TestError::PasswordHash(e.to_string()))
}
