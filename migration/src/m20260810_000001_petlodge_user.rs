use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PetlodgeUser::Table)
                    .if_not_exists()
                    .col(pk_auto(PetlodgeUser::Id))
                    .col(string_uniq(PetlodgeUser::Email))
                    .col(string(PetlodgeUser::Name))
                    .col(string(PetlodgeUser::PasswordHash))
                    .col(timestamp(PetlodgeUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PetlodgeUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PetlodgeUser {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    CreatedAt,
}
