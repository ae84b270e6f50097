use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with an already-hashed password
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<entity::petlodge_user::Model, DbErr> {
        let user = entity::petlodge_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(name.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::petlodge_user::Model>, DbErr> {
        entity::prelude::PetlodgeUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::petlodge_user::Model>, DbErr> {
        entity::prelude::PetlodgeUser::find()
            .filter(entity::petlodge_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates the user's display name, returning None when the user does
    /// not exist.
    pub async fn update_name(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<Option<entity::petlodge_user::Model>, DbErr> {
        let user = match entity::prelude::PetlodgeUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.name = ActiveValue::Set(name.to_string());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PetlodgeUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
