#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    User(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::Unknown(anyhow::anyhow!(value))
    }
}

/// True when the database rejected a write because of a unique index.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(e) if e.is_unique_violation())
}

/// True when a write referenced a row that no longer exists.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(e) if e.is_foreign_key_violation())
}

#[macro_export]
macro_rules! user {
    ($($arg:tt)*) => {
        return Err($crate::Error::User(format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    ($($arg:tt)*) => {
        return Err($crate::Error::NotFound(format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! conflict {
    ($($arg:tt)*) => {
        return Err($crate::Error::Conflict(format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! unauthorized {
    ($($arg:tt)*) => {
        return Err($crate::Error::Unauthorized(format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! server {
    ($($arg:tt)*) => {
        return Err($crate::Error::Server(format!($($arg)*)))
    };
}
