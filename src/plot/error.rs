use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug, Clone)]
pub enum PlotError {
    #[error("Data cannot be plotted: {0}")]
    InvalidData(String),

    #[error("Failed to register chart font")]
    Font,

    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to encode chart image: {0}")]
    Encoding(String),
}

pub type Result<T> = core::result::Result<T, PlotError>;
