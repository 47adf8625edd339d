//! Errors raised while talking to the pet-image API.
//!
//! Every variant is recovered at the operation boundary: the fetch task turns
//! it into the single user-facing error string and nothing propagates further.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("{source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// The body did not match the expected JSON shape.
    #[error("invalid response body: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// A request URL could not be built from the configured base URL.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),

    /// Image bytes could not be decoded into a thumbnail.
    #[error("invalid image data: {0}")]
    Image(String),
}

impl FetchError {
    /// Stable short name, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Decode { .. } => "decode",
            FetchError::InvalidUrl(_) => "invalid_url",
            FetchError::Image(_) => "image",
        }
    }
}

impl From<image::ImageError> for FetchError {
    fn from(err: image::ImageError) -> Self {
        FetchError::Image(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_matches_user_facing_format() {
        let err = FetchError::HttpStatus { status: 500 };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.kind(), "http_status");
    }

    #[test]
    fn image_error_keeps_detail() {
        let err = FetchError::Image("unsupported format".to_string());
        assert_eq!(err.to_string(), "invalid image data: unsupported format");
        assert_eq!(err.kind(), "image");
    }
}
