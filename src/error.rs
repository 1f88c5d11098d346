pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid query: {0}")]
    Query(String),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
}
