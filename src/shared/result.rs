/// Application-level Result alias backed by anyhow::Error.
///
/// Networked operations use `Result<T, FetchError>` instead so that callers
/// can match on the failure category.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
