use thiserror::Error;

/// Errors surfaced by the decoration and background-removal operations.
///
/// Every failure is scoped to the single requested image: callers can show
/// the message to the user and keep any previously rendered artifacts.
#[derive(Error, Debug)]
pub enum Error {
    /// The QR symbol source could not produce a usable symbol image
    /// (encoder rejected the payload, generator unreachable or timed out,
    /// or the response was not a decodable image).
    #[error("QR generation failed: {message}")]
    QrGeneration {
        /// Human-readable failure description
        message: String,
    },

    /// A supplied or referenced image could not be decoded or encoded.
    #[error("image processing failed: {message}")]
    ImageLoad {
        /// Human-readable failure description
        message: String,
    },

    /// The caller supplied an out-of-range output size, sensitivity,
    /// crop region, or an empty payload. Rejected before any pixel work.
    #[error("invalid style parameters: {message}")]
    InvalidStyle {
        /// Human-readable failure description
        message: String,
    },

    /// The decorated output no longer decodes back to its payload.
    #[error("decorated QR code failed scan verification")]
    ScanFailed,
}

impl Error {
    pub(crate) fn qr_generation(message: impl Into<String>) -> Self {
        Error::QrGeneration {
            message: message.into(),
        }
    }

    pub(crate) fn image_load(message: impl Into<String>) -> Self {
        Error::ImageLoad {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_style(message: impl Into<String>) -> Self {
        Error::InvalidStyle {
            message: message.into(),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::ImageLoad {
            message: err.to_string(),
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::qr_generation("generator returned 503");
        assert_eq!(err.to_string(), "QR generation failed: generator returned 503");

        let err = Error::invalid_style("output size 100 below minimum 200");
        assert!(err.to_string().contains("output size 100"));
    }

    #[test]
    fn test_from_image_error() {
        let img_err = image::ImageError::Limits(image::error::LimitError::from_kind(
            image::error::LimitErrorKind::InsufficientMemory,
        ));
        let err: Error = img_err.into();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }
}
