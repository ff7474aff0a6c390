/// Errors raised while building or querying ranges and distributions.
///
/// Offending points and ranges are carried in their display form so the error
/// does not depend on the domain type.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A range was constructed with bounds that do not describe an interval.
    #[error("invalid range from {start} to {end}: {reason}")]
    InvalidRange {
        start: String,
        end: String,
        reason: &'static str,
    },
    /// A subset was requested over a range its parent does not cover.
    #[error("subset range {inner} is not surrounded by parent range {outer}")]
    NotSurrounded { outer: String, inner: String },
    /// A defaulting distribution was built from ranges with a gap between them.
    #[error("primary range {primary} is not near backup range {backup}")]
    NotNear { primary: String, backup: String },
    /// A point query fell outside the declared range.
    #[error("{point} is out of range for distribution with range {range}")]
    PointOutOfRange { point: String, range: String },
    /// A range query was not surrounded by the declared range.
    #[error("{query} is out of range for distribution with range {range}")]
    RangeOutOfRange { query: String, range: String },
    /// A product's value does not fit in the value type.
    #[error("scaling {value} by {multiplier} overflows")]
    ScaleOverflow { value: String, multiplier: i64 },
    /// Averaging across the edge of a defaulting distribution's primary range.
    #[error("averaging {query} across the edge of primary range {primary} is not supported")]
    UnsupportedStraddle { query: String, primary: String },
}

pub type Result<T> = std::result::Result<T, Error>;
