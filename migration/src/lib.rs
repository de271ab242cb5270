pub use sea_orm_migration::prelude::*;

mod m20260301_000001_destination;
mod m20260301_000002_tour;
mod m20260301_000003_accommodation;
mod m20260301_000004_blog_post;
mod m20260301_000005_quote;
mod m20260301_000006_subscriber;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_destination::Migration),
            Box::new(m20260301_000002_tour::Migration),
            Box::new(m20260301_000003_accommodation::Migration),
            Box::new(m20260301_000004_blog_post::Migration),
            Box::new(m20260301_000005_quote::Migration),
            Box::new(m20260301_000006_subscriber::Migration),
        ]
    }
}
