// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for layout, tick selection and drawing.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ChartError {
    /// A series was built from x and y sequences of different lengths.
    #[error("number of x and y data points do not match ({xs} vs {ys})")]
    DimensionMismatch { xs: usize, ys: usize },

    /// Tick selection was fed a non-finite or inverted range.
    #[error("invalid range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    /// A declared but unsupported variant was reached at draw time.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// Layout was attempted without any data to lay out.
    #[error("no data to lay out")]
    NoData,
}

pub type Result<T> = std::result::Result<T, ChartError>;
