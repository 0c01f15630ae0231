use thiserror::Error;

/// Failures of the fetch/compose pipeline. Anything unexpected during
/// composition is reported to the user the same way a load failure is.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to fetch the QR image from the remote service")]
    ImageLoad(#[from] reqwest::Error),
    #[error("failed to decode the fetched QR image")]
    ImageDecode(#[from] image::ImageError),
    #[error("failed to encode the composed image")]
    ImageEncode(#[source] image::ImageError),
}
