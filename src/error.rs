//! Error type shared by the session and the scenario I/O layer.

use thiserror::Error;

/// Errors raised before or around route construction.
///
/// The routing algorithms themselves do not fail on well-formed input;
/// every variant here describes a rejected configuration or a malformed
/// scenario stream.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Capacity must allow at least one point per trip.
    #[error("invalid configuration: capacity must be at least 1 (got {0})")]
    InvalidCapacity(i64),

    /// A coordinate was NaN or infinite.
    #[error("invalid configuration: coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate {
        /// X-coordinate as supplied.
        x: f64,
        /// Y-coordinate as supplied.
        y: f64,
    },

    /// A scenario declared a negative number of points.
    #[error("scenario {scenario}: point count must be non-negative (got {count})")]
    NegativePointCount {
        /// 1-based scenario number.
        scenario: usize,
        /// Declared count.
        count: i64,
    },

    /// A token could not be read as the expected number.
    #[error("scenario {scenario}: expected {expected}, found `{token}`")]
    InvalidToken {
        /// 1-based scenario number (0 for the header).
        scenario: usize,
        /// What the parser was looking for.
        expected: &'static str,
        /// The offending token.
        token: String,
    },

    /// The stream ended before a scenario was complete.
    #[error("scenario {scenario}: unexpected end of input while reading {expected}")]
    UnexpectedEof {
        /// 1-based scenario number (0 for the header).
        scenario: usize,
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// A generation extent was NaN or infinite.
    #[error("invalid configuration: extent {0} is not finite")]
    NonFiniteExtent(f64),

    /// Writing the route stream failed.
    #[error("failed to write routes")]
    Io(#[from] std::io::Error),
}
