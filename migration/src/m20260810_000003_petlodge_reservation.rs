use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000002_petlodge_pet::PetlodgePet;

static FK_RESERVATION_PET_ID: &str = "fk_petlodge_reservation_pet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys go inline; SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(PetlodgeReservation::Table)
                    .if_not_exists()
                    .col(pk_auto(PetlodgeReservation::Id))
                    .col(integer(PetlodgeReservation::PetId))
                    .col(date(PetlodgeReservation::CheckIn))
                    .col(date(PetlodgeReservation::CheckOut))
                    .col(string(PetlodgeReservation::Status))
                    .col(string_null(PetlodgeReservation::Notes))
                    .col(timestamp(PetlodgeReservation::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESERVATION_PET_ID)
                            .from(PetlodgeReservation::Table, PetlodgeReservation::PetId)
                            .to(PetlodgePet::Table, PetlodgePet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(PetlodgeReservation::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PetlodgeReservation {
    Table,
    Id,
    PetId,
    CheckIn,
    CheckOut,
    Status,
    Notes,
    CreatedAt,
}
