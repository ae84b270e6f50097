pub use sea_orm_migration::prelude::*;

mod m20260810_000001_petlodge_user;
mod m20260810_000002_petlodge_pet;
mod m20260810_000003_petlodge_reservation;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_petlodge_user::Migration),
            Box::new(m20260810_000002_petlodge_pet::Migration),
            Box::new(m20260810_000003_petlodge_reservation::Migration),
        ]
    }
}
