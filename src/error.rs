use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccelError {
    #[error("database operation failed: {0}")]
    Db(#[from] sea_orm::DbErr),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AccelError>;
