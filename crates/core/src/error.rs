/// Boxed error produced by a storage collaborator.
///
/// The core never inspects it; it is carried unchanged to the HTTP layer.
pub type StorageError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Not found: {entity} for {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Storage(StorageError),
}
