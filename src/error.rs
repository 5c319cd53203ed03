use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::num::{ParseFloatError, ParseIntError};

pub type CampusResult<T> = Result<T, CampusError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CampusError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    Migrate { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse env var `{}`", name))]
    ParseEnvVar {
        source: ParseIntError,
        name: &'static str,
    },
    #[snafu(display("Unable to parse fee amount {:?}", original))]
    ParseAmount {
        source: ParseFloatError,
        original: String,
    },
    #[snafu(display("Fee amount {:?} is not a finite number", original))]
    NonFiniteAmount { original: String },
    #[snafu(display("Error commiting SQL transaction"))]
    CommitTransaction { source: sqlx::Error },
}

impl CampusError {
    fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        match self {
            Self::OpenDatabase { .. } | Self::GetDatabaseConnection { .. } => ISE,
            Self::Migrate { .. } => ISE,
            Self::MakeQuery { source } => match source {
                sqlx::Error::RowNotFound => NF,
                sqlx::Error::Database(db_error) if db_error.is_foreign_key_violation() => BI,
                _ => ISE,
            },
            Self::BadEnvVar { .. } | Self::ParseEnvVar { .. } => ISE,
            Self::CommitTransaction { .. } => ISE,
            Self::ParseAmount { .. } | Self::NonFiniteAmount { .. } => BI,
        }
    }
}

impl IntoResponse for CampusError {
    fn into_response(self) -> Response {
        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Campus Error"}
                    span {(desc)}
                }
            }
        };

        let status_code = self.status_code();

        error!(?self, "Error!");
        (status_code, basic_error(self.to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_amount_is_bad_request() {
        let original = "five hundred".to_string();
        let source = original.parse::<f64>().unwrap_err();
        let error = CampusError::ParseAmount { source, original };

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_row_is_not_found() {
        let error = CampusError::MakeQuery {
            source: sqlx::Error::RowNotFound,
        };
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn pool_failures_are_server_errors() {
        let error = CampusError::GetDatabaseConnection {
            source: sqlx::Error::PoolTimedOut,
        };
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
