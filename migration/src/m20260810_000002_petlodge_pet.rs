use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_petlodge_user::PetlodgeUser;

static FK_PET_OWNER_ID: &str = "fk_petlodge_pet_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys go inline; SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(PetlodgePet::Table)
                    .if_not_exists()
                    .col(pk_auto(PetlodgePet::Id))
                    .col(integer(PetlodgePet::OwnerId))
                    .col(string(PetlodgePet::Name))
                    .col(string(PetlodgePet::Species))
                    .col(string_null(PetlodgePet::Breed))
                    .col(date_null(PetlodgePet::BirthDate))
                    .col(string_null(PetlodgePet::Notes))
                    .col(timestamp(PetlodgePet::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PET_OWNER_ID)
                            .from(PetlodgePet::Table, PetlodgePet::OwnerId)
                            .to(PetlodgeUser::Table, PetlodgeUser::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PetlodgePet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PetlodgePet {
    Table,
    Id,
    OwnerId,
    Name,
    Species,
    Breed,
    BirthDate,
    Notes,
    CreatedAt,
}
