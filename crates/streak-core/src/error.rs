//! Error types for the odds engine.

/// Errors that can occur while adjusting or computing odds.
#[derive(Debug, thiserror::Error)]
pub enum OddsError {
    /// The luck curve is undefined for this base percentage.
    #[error("luck curve is undefined for {percent}% with luck {luck}")]
    DegenerateLuckDomain {
        /// The base percentage that was entered.
        percent: f64,
        /// The luck value that was entered.
        luck: f64,
    },

    /// A looting tier outside 0-3 was rejected by the strict tier policy.
    #[error("looting tier {0} is out of range (expected 0-3)")]
    TierOutOfRange(i64),

    /// A modifier needed a parameter the source could not supply.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// A game name did not match any registered game.
    #[error("unknown game: {0}")]
    UnknownGame(String),

    /// Reading a parameter failed.
    #[error("input error: {0}")]
    Input(#[from] std::io::Error),
}

/// Convenience result type for odds operations.
pub type OddsResult<T> = Result<T, OddsError>;
