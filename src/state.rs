use crate::{
    config::RuntimeConfiguration,
    data::student::Student,
    error::{
        CampusResult, CommitTransactionSnafu, GetDatabaseConnectionSnafu, MigrateSnafu,
        OpenDatabaseSnafu,
    },
    maud_conveniences::render_nav,
};
use maud::{DOCTYPE, Markup, html};
use snafu::ResultExt;
use sqlx::{
    Pool, Sqlite, Transaction,
    pool::PoolConnection,
    sqlite::SqlitePoolOptions,
};
use std::ops::Deref;

#[derive(Clone, Debug)]
pub struct CampusState {
    pool: Pool<Sqlite>,
    config: RuntimeConfiguration,
}

impl CampusState {
    pub async fn new(options: SqlitePoolOptions, config: RuntimeConfiguration) -> CampusResult<Self> {
        let db_config = config.db_config();
        let pool = options
            .max_connections(db_config.max_connections())
            .connect_with(db_config.connect_options())
            .await
            .context(OpenDatabaseSnafu)?;

        let state = Self { pool, config };
        state.initialise_schema().await?;
        Ok(state)
    }

    /// Applies the embedded schema, then seeds the sample students into an empty `Students` table.
    /// Safe to run on every start.
    async fn initialise_schema(&self) -> CampusResult<()> {
        sqlx::migrate!().run(&self.pool).await.context(MigrateSnafu)?;

        let mut transaction = self.get_transaction().await?;
        let seeded = Student::seed_if_empty(&mut transaction).await?;
        transaction.commit().await.context(CommitTransactionSnafu)?;

        if seeded > 0 {
            info!(seeded, "Seeded sample students");
        } else {
            debug!("Students already present, skipping seed");
        }
        Ok(())
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :)
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Campus" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center text-white" {
                    (render_nav())
                    main class="flex-1 flex flex-col items-center justify-center w-full p-4" {
                        (markup)
                    }
                }
            }
        }
    }

    pub async fn get_connection(&self) -> CampusResult<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }

    pub async fn get_transaction(&self) -> CampusResult<Transaction<'static, Sqlite>> {
        self.pool.begin().await.context(GetDatabaseConnectionSnafu)
    }

    pub fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    pub async fn sensible_shutdown(&self) {
        self.pool.close().await;
    }
}

impl Deref for CampusState {
    type Target = Pool<Sqlite>;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}

#[cfg(test)]
pub async fn test_state() -> (CampusState, tempfile::TempDir) {
    use crate::config::DbConfig;

    let dir = tempfile::tempdir().expect("unable to create temp dir");
    let config = RuntimeConfiguration::from_parts(
        DbConfig::at_path(dir.path().join("campus.db")),
        "127.0.0.1:0",
    );
    let state = CampusState::new(SqlitePoolOptions::new(), config)
        .await
        .expect("unable to create state");
    (state, dir)
}
