use crate::error::{CampusResult, MakeQuerySnafu};
use snafu::ResultExt;
use sqlx::SqliteConnection;

pub mod attendance;
pub mod fee;
pub mod student;

pub trait DataType: Sized {
    type Id;
    type FormForAdding;

    /// Table the rows live in, as named in the schema migration.
    const TABLE: &'static str;

    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> CampusResult<Self::Id>;

    async fn count(conn: &mut SqliteConnection) -> CampusResult<i64> {
        let query = format!("SELECT COUNT(*) FROM {}", Self::TABLE);
        sqlx::query_scalar(&query)
            .fetch_one(conn)
            .await
            .context(MakeQuerySnafu)
    }
}
