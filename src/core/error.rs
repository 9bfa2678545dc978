use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexMoveError {
    #[error("Non-finite pixel coordinate: ({0}, {1})")]
    NonFinitePixel(f32, f32),

    #[error("Invalid hex size: {0} (must be finite and positive)")]
    InvalidHexSize(f32),

    #[error("Non-finite layout origin: ({0}, {1})")]
    NonFiniteOrigin(f32, f32),
}

pub type Result<T> = std::result::Result<T, HexMoveError>;
