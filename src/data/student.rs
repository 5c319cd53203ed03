use crate::{
    data::DataType,
    error::{CampusResult, MakeQuerySnafu},
};
use snafu::ResultExt;
use sqlx::SqliteConnection;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub course: String,
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: Option<String>,
    pub course: String,
}

const SEED_STUDENTS: [(&str, &str, &str); 5] = [
    ("John Doe", "john.doe@email.com", "Computer Science"),
    ("Jane Smith", "jane.smith@email.com", "Mathematics"),
    ("Mike Johnson", "mike.johnson@email.com", "Physics"),
    ("Sarah Wilson", "sarah.wilson@email.com", "Chemistry"),
    ("David Brown", "david.brown@email.com", "Biology"),
];

impl DataType for Student {
    type Id = i64;
    type FormForAdding = NewStudent;
    const TABLE: &'static str = "Students";

    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> CampusResult<Self::Id> {
        let NewStudent {
            name,
            email,
            course,
        } = to_be_added;

        Ok(
            sqlx::query("INSERT INTO Students (name, email, course) VALUES (?, ?, ?)")
                .bind(name)
                .bind(email)
                .bind(course)
                .execute(conn)
                .await
                .context(MakeQuerySnafu)?
                .last_insert_rowid(),
        )
    }
}

impl Student {
    pub async fn get_all_by_name(conn: &mut SqliteConnection) -> CampusResult<Vec<Self>> {
        sqlx::query_as("SELECT id, name, email, course FROM Students ORDER BY name")
            .fetch_all(conn)
            .await
            .context(MakeQuerySnafu)
    }

    /// Inserts the sample students, but only into an empty table. Returns how many were added.
    pub async fn seed_if_empty(conn: &mut SqliteConnection) -> CampusResult<usize> {
        if Self::count(&mut *conn).await? > 0 {
            return Ok(0);
        }

        for (name, email, course) in SEED_STUDENTS {
            Self::insert_into_database(
                NewStudent {
                    name: name.to_string(),
                    email: Some(email.to_string()),
                    course: course.to_string(),
                },
                &mut *conn,
            )
            .await?;
        }

        Ok(SEED_STUDENTS.len())
    }
}
