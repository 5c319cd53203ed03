use crate::{
    data::DataType,
    error::{CampusResult, MakeQuerySnafu},
};
use chrono::NaiveDate;
use serde::Deserialize;
use snafu::ResultExt;
use sqlx::SqliteConnection;

#[allow(dead_code)] //only read back whole in tests, listings use `NamedAttendanceRecord`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,
    pub course: String,
    pub date: NaiveDate,
    pub status: String,
}

/// An attendance row with the student's name pulled in from `Students`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NamedAttendanceRecord {
    pub id: i64,
    pub student_name: String,
    pub course: String,
    pub date: NaiveDate,
    pub status: String,
}

#[derive(Deserialize)]
pub struct RecordAttendanceForm {
    pub student_id: i64,
    pub course: String,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub student_id: i64,
    pub course: String,
    pub date: NaiveDate,
    pub status: String,
}

impl NewAttendance {
    pub fn from_form(form: RecordAttendanceForm, date: NaiveDate) -> Self {
        let RecordAttendanceForm {
            student_id,
            course,
            status,
        } = form;

        Self {
            student_id,
            course,
            date,
            status,
        }
    }
}

impl DataType for AttendanceRecord {
    type Id = i64;
    type FormForAdding = NewAttendance;
    const TABLE: &'static str = "Attendance";

    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> CampusResult<Self::Id> {
        let NewAttendance {
            student_id,
            course,
            date,
            status,
        } = to_be_added;

        Ok(sqlx::query(
            "INSERT INTO Attendance (student_id, course, date, status) VALUES (?, ?, ?, ?)",
        )
        .bind(student_id)
        .bind(course)
        .bind(date)
        .bind(status)
        .execute(conn)
        .await
        .context(MakeQuerySnafu)?
        .last_insert_rowid())
    }
}

impl AttendanceRecord {
    /// Newest first; records sharing a date are ordered by student name.
    pub async fn get_all_with_student_names(
        conn: &mut SqliteConnection,
    ) -> CampusResult<Vec<NamedAttendanceRecord>> {
        sqlx::query_as(
            "SELECT a.id, s.name AS student_name, a.course, a.date, a.status \
             FROM Attendance a \
             JOIN Students s ON a.student_id = s.id \
             ORDER BY a.date DESC, s.name",
        )
        .fetch_all(conn)
        .await
        .context(MakeQuerySnafu)
    }

    #[cfg(test)]
    pub async fn get_by_id(id: i64, conn: &mut SqliteConnection) -> CampusResult<Self> {
        sqlx::query_as("SELECT id, student_id, course, date, status FROM Attendance WHERE id = ?")
            .bind(id)
            .fetch_one(conn)
            .await
            .context(MakeQuerySnafu)
    }
}
