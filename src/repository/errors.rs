use thiserror::Error;

/// A driver-level failure, normalized to a code and a message.
///
/// `code` is the SQLSTATE for errors reported by the database itself, or a
/// fixed label describing the driver failure otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct StoreError {
    pub code: String,
    pub message: String,
}

impl StoreError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let code = db_err
                .code()
                .map(|c| c.into_owned())
                .unwrap_or_else(|| "DATABASE_ERROR".to_string());
            return Self::new(code, db_err.message());
        }

        let code = match &err {
            sqlx::Error::PoolTimedOut => "POOL_TIMED_OUT",
            sqlx::Error::PoolClosed => "POOL_CLOSED",
            sqlx::Error::Io(_) => "IO_ERROR",
            sqlx::Error::Tls(_) => "TLS_ERROR",
            sqlx::Error::Protocol(_) => "PROTOCOL_ERROR",
            sqlx::Error::RowNotFound => "ROW_NOT_FOUND",
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => "DECODE_ERROR",
            _ => "DRIVER_ERROR",
        };
        Self::new(code, err.to_string())
    }
}
