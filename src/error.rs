use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerceptronError {
    #[error("dimension mismatch: expected {expected} inputs, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("invalid construction: a perceptron needs at least one input, requested {0}")]
    InvalidConstruction(usize),

    #[error("learning rate must be positive, got {0}")]
    InvalidLearningRate(f64),
}

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to prepare output directory: {0}")]
    Io(#[from] std::io::Error),
}
