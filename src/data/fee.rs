use crate::{
    data::DataType,
    error::{CampusResult, MakeQuerySnafu, NonFiniteAmountSnafu, ParseAmountSnafu},
};
use serde::Deserialize;
use snafu::{ResultExt, ensure};
use sqlx::SqliteConnection;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FeeStructureEntry {
    pub id: i64,
    pub course: String,
    pub amount: f64,
}

#[derive(Deserialize)]
pub struct AddFeeForm {
    pub course: String,
    pub amount: String,
}

#[derive(Debug, Clone)]
pub struct NewFee {
    pub course: String,
    pub amount: f64,
}

impl TryFrom<AddFeeForm> for NewFee {
    type Error = crate::error::CampusError;

    fn try_from(AddFeeForm { course, amount }: AddFeeForm) -> CampusResult<Self> {
        let parsed: f64 = amount
            .trim()
            .parse()
            .context(ParseAmountSnafu { original: &amount })?;
        ensure!(parsed.is_finite(), NonFiniteAmountSnafu { original: amount });

        Ok(Self {
            course,
            amount: parsed,
        })
    }
}

impl DataType for FeeStructureEntry {
    type Id = i64;
    type FormForAdding = NewFee;
    const TABLE: &'static str = "FeeStructure";

    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> CampusResult<Self::Id> {
        let NewFee { course, amount } = to_be_added;

        Ok(
            sqlx::query("INSERT INTO FeeStructure (course, amount) VALUES (?, ?)")
                .bind(course)
                .bind(amount)
                .execute(conn)
                .await
                .context(MakeQuerySnafu)?
                .last_insert_rowid(),
        )
    }
}

impl FeeStructureEntry {
    pub async fn get_all(conn: &mut SqliteConnection) -> CampusResult<Vec<Self>> {
        sqlx::query_as("SELECT id, course, amount FROM FeeStructure ORDER BY id")
            .fetch_all(conn)
            .await
            .context(MakeQuerySnafu)
    }

    /// Every course with at least one fee entry, deduplicated and in alphabetical order.
    pub async fn get_distinct_courses(conn: &mut SqliteConnection) -> CampusResult<Vec<String>> {
        sqlx::query_scalar("SELECT DISTINCT course FROM FeeStructure ORDER BY course")
            .fetch_all(conn)
            .await
            .context(MakeQuerySnafu)
    }
}
