use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("layout error: {0}")]
    Layout(String),
    #[error("render error: {0}")]
    Render(String),
    #[error("fetch error: {0}")]
    Fetch(String),
    #[error("persist error: {0}")]
    Persist(String),
}

pub type Result<T> = std::result::Result<T, Error>;
