use thiserror::Error;

/// What went wrong while looking for a product image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    HttpStatus,
    NotFound,
    Parse,
}

/// Failure of a single product image lookup.
///
/// The `Display` output is the line printed by the CLI, so every variant except
/// `NotFound` is prefixed with `Error fetching image: `.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Error fetching image: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Error fetching image: {0}")]
    Status(#[source] reqwest::Error),

    #[error("Error fetching image: {0}")]
    Url(#[from] url::ParseError),

    #[error("Error: Image not found on the page.")]
    NotFound,
}

impl ImageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImageError::Network(_) => ErrorKind::Network,
            ImageError::Status(_) => ErrorKind::HttpStatus,
            ImageError::Url(_) => ErrorKind::Parse,
            ImageError::NotFound => ErrorKind::NotFound,
        }
    }
}

impl From<reqwest::Error> for ImageError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_status() {
            ImageError::Status(err)
        } else {
            ImageError::Network(err)
        }
    }
}
