use thiserror::Error;

#[derive(Debug, Error)]
pub enum StressError {
    #[error("cannot resolve DNS server address: {0}")]
    ServerAddress(String),
}
