use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaskError {
    #[error("failed to load shape image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("shape image has zero dimensions")]
    EmptySource,
}
