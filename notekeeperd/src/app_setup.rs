use async_trait::async_trait;
use log::{error, info};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Build, Rocket};
use notekeeper::config::app_config::data::AppConfigData;
use notekeeper::config::app_config::AppConfig;
use notekeeper::config::storage_config::StorageBackend;
use notekeeper::database;
use notekeeper::hasher::ProductionHasher;
use notekeeper::storage::{FileNoteStorage, NoteStorage, SqlNoteStorage};
use notekeeper::user_db::{ProductionUserDb, UserDb};
use crate::access::AccessMode;
use crate::routes::NotekeeperRocketBuildExt;

/// Builds the storage and user database from the configuration and mounts
/// the routes that fit the configured backend.
pub struct AppSetupFairing;

macro_rules! ok_or_bail {
    ($rocket:ident, $expr:expr, |$e:ident| $error_logger:expr) => ({
        match $expr {
            std::result::Result::Ok(ok) => ok,
            std::result::Result::Err(e) => {
                let $e = e;
                $error_logger;
                return std::result::Result::Err($rocket);
            },
        }
    });
}

#[async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        Info {
            name: "app setup",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(
        &self,
        rocket: Rocket<Build>,
    ) -> rocket::fairing::Result {
        let config_data: AppConfigData = ok_or_bail!(
            rocket,
            rocket.figment().extract(),
            |e| for e in e {
                error!("configuration error: {e}");
            }
        );
        let app_config = ok_or_bail!(
            rocket,
            AppConfig::try_from(config_data),
            |e| error!("invalid configuration: {e}")
        );

        let rocket = match app_config.storage.backend {
            StorageBackend::JsonFile => {
                let storage = ok_or_bail!(
                    rocket,
                    FileNoteStorage::new(&app_config).await,
                    |e| error!("note storage initialization failed: {e}")
                );
                info!(
                    "single-user mode, notes in \"{}\"",
                    storage.path().display(),
                );
                let storage: Box<dyn NoteStorage> = Box::new(storage);
                rocket
                    .manage(storage)
                    .manage(AccessMode::SingleUser)
            },
            StorageBackend::Sqlite => {
                let hasher_config = ok_or_bail!(
                    rocket,
                    app_config.hasher_config.to_hasher_config(),
                    |e| error!("invalid hasher parameters: {e}")
                );
                let hasher = ok_or_bail!(
                    rocket,
                    ProductionHasher::new(hasher_config),
                    |e| error!("password hasher initialization failed: {e}")
                );
                let pool = ok_or_bail!(
                    rocket,
                    database::connect(&app_config.storage).await,
                    |e| error!("database initialization failed: {e}")
                );
                info!(
                    "multi-user mode, database at \"{}\"",
                    app_config.storage.database_path.display(),
                );
                let user_db: Box<dyn UserDb> = Box::new(
                    ProductionUserDb::new(pool.clone(), hasher)
                );
                let storage: Box<dyn NoteStorage> = Box::new(SqlNoteStorage::new(pool));
                rocket
                    .manage(storage)
                    .manage(user_db)
                    .manage(AccessMode::MultiUser)
                    .install_notekeeper_auth()
            },
        };

        Ok(
            rocket
                .manage(app_config)
                .install_notekeeper_notes()
                .install_notekeeper_catchers()
        )
    }
}
