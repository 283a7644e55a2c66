//! Seeds the holocron database from a JSON file.
//!
//! The file holds four optional arrays:
//!
//! ```json
//! {
//!   "users": [{ "email": "luke@rebellion.org", "password": "x", "is_active": true }],
//!   "characters": [{ "name": "Luke Skywalker", "url": "https://swapi.dev/api/people/1/" }],
//!   "vehicles": [],
//!   "planets": []
//! }
//! ```
//!
//! Migrations are applied first. Rows whose unique key (user email, catalog name)
//! already exists are skipped, so the loader can be re-run against the same file.
//!
//! Run: cargo run --bin seed -- data/seed.json

use std::path::PathBuf;

use clap::Parser;
use entity::sea_orm_active_enums::CatalogKind;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectOptions, Database,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seed", about = "Load users and catalog entities from a JSON file")]
struct Args {
    /// Path to the JSON seed file
    file: PathBuf,

    /// Database connection string
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:///tmp/test.db?mode=rwc"
    )]
    database_url: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct SeedFile {
    users: Vec<SeedUser>,
    characters: Vec<SeedCatalogItem>,
    vehicles: Vec<SeedCatalogItem>,
    planets: Vec<SeedCatalogItem>,
}

#[derive(Deserialize, Debug)]
struct SeedUser {
    email: String,
    password: String,
    #[serde(default = "default_active")]
    is_active: bool,
}

#[derive(Deserialize, Debug)]
struct SeedCatalogItem {
    name: String,
    url: String,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Default)]
struct Counts {
    inserted: usize,
    skipped: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let raw = tokio::fs::read_to_string(&args.file).await?;
    let seed: SeedFile = serde_json::from_str(&raw)?;

    let mut opt = ConnectOptions::new(&args.database_url);
    opt.sqlx_logging(false);
    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    let counts = seed_users(&db, &seed.users).await?;
    tracing::info!(
        "users: {} inserted, {} skipped",
        counts.inserted,
        counts.skipped
    );

    for (kind, items) in [
        (CatalogKind::Character, &seed.characters),
        (CatalogKind::Vehicle, &seed.vehicles),
        (CatalogKind::Planet, &seed.planets),
    ] {
        let counts = seed_catalog(&db, kind, items).await?;
        tracing::info!(
            "{}: {} inserted, {} skipped",
            kind.to_value(),
            counts.inserted,
            counts.skipped
        );
    }

    Ok(())
}

async fn seed_users(db: &DatabaseConnection, users: &[SeedUser]) -> Result<Counts, DbErr> {
    let mut counts = Counts::default();

    for user in users {
        let existing = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(&user.email))
            .one(db)
            .await?;

        if existing.is_some() {
            tracing::debug!("Skipping existing user {}", user.email);
            counts.skipped += 1;
            continue;
        }

        entity::user::ActiveModel {
            email: ActiveValue::Set(user.email.clone()),
            password: ActiveValue::Set(user.password.clone()),
            is_active: ActiveValue::Set(user.is_active),
            ..Default::default()
        }
        .insert(db)
        .await?;

        counts.inserted += 1;
    }

    Ok(counts)
}

async fn seed_catalog(
    db: &DatabaseConnection,
    kind: CatalogKind,
    items: &[SeedCatalogItem],
) -> Result<Counts, DbErr> {
    let mut counts = Counts::default();

    for item in items {
        if catalog_name_exists(db, kind, &item.name).await? {
            tracing::debug!("Skipping existing {} {}", kind.to_value(), item.name);
            counts.skipped += 1;
            continue;
        }

        let name = ActiveValue::Set(item.name.clone());
        let url = ActiveValue::Set(item.url.clone());

        match kind {
            CatalogKind::Character => {
                entity::character::ActiveModel {
                    name,
                    url,
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
            CatalogKind::Vehicle => {
                entity::vehicle::ActiveModel {
                    name,
                    url,
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
            CatalogKind::Planet => {
                entity::planet::ActiveModel {
                    name,
                    url,
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
        }

        counts.inserted += 1;
    }

    Ok(counts)
}

async fn catalog_name_exists(
    db: &DatabaseConnection,
    kind: CatalogKind,
    name: &str,
) -> Result<bool, DbErr> {
    let found = match kind {
        CatalogKind::Character => entity::prelude::Character::find()
            .filter(entity::character::Column::Name.eq(name))
            .one(db)
            .await?
            .is_some(),
        CatalogKind::Vehicle => entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Name.eq(name))
            .one(db)
            .await?
            .is_some(),
        CatalogKind::Planet => entity::prelude::Planet::find()
            .filter(entity::planet::Column::Name.eq(name))
            .one(db)
            .await?
            .is_some(),
    };

    Ok(found)
}
