pub use sea_orm_migration::prelude::*;

mod m20251019_000001_create_user_table;
mod m20251019_000002_create_character_table;
mod m20251019_000003_create_planet_table;
mod m20251019_000004_create_vehicle_table;
mod m20251019_000005_create_character_favorite_table;
mod m20251019_000006_create_planet_favorite_table;
mod m20251019_000007_create_vehicle_favorite_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_create_user_table::Migration),
            Box::new(m20251019_000002_create_character_table::Migration),
            Box::new(m20251019_000003_create_planet_table::Migration),
            Box::new(m20251019_000004_create_vehicle_table::Migration),
            Box::new(m20251019_000005_create_character_favorite_table::Migration),
            Box::new(m20251019_000006_create_planet_favorite_table::Migration),
            Box::new(m20251019_000007_create_vehicle_favorite_table::Migration),
        ]
    }
}
