use thiserror::Error;

/// Everything that can go wrong while building or evaluating a colormap.
#[derive(Debug, Error)]
pub enum ColormapError {
    /// The gradient table has no stops.
    #[error("gradient table must contain at least one stop")]
    InvalidTable,

    /// The selected segment has zero width, so interpolation would divide by zero.
    #[error("segment {index} at position {position} has zero width")]
    DegenerateSegment { index: usize, position: f64 },

    /// A stop position is lower than the one before it.
    #[error("stop {index} is out of order ({position} < {previous})")]
    OutOfOrderStops {
        index: usize,
        position: f64,
        previous: f64,
    },

    /// The last stop sits at or past 1.0, leaving its segment empty.
    #[error("last stop {index} at position {position} must be below 1.0")]
    FinalStopOutOfRange { index: usize, position: f64 },

    /// A stop position is NaN or infinite.
    #[error("stop {index} has a non-finite position")]
    NonFinitePosition { index: usize },

    /// No palette is registered under this name.
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    /// A row of a table file could not be read.
    #[error("line {line}: {message}")]
    TableParse { line: u64, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ColormapError>;
