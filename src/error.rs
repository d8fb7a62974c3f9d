use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),
    #[error("Invalid hash key: `{0}`")]
    InvalidHashKey(String),
    #[error("Invalid hash key range: starting hash key `{start}` is greater than ending hash key `{end}`")]
    InvalidHashKeyRange { start: u128, end: u128 },
    #[error("Interrupted while waiting after splitting shard `{0}`")]
    Interrupted(String),
    #[error(transparent)]
    Client(#[from] anyhow::Error),
}

impl Error {
    pub fn usage<T: Into<String>>(message: T) -> Self {
        Self::Usage(message.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
