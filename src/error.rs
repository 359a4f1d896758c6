use thiserror::Error;

/// Errors raised while decoding a seed color or selecting an anchor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The string is not a 6 or 8 digit HEX color (with or without `#`).
    #[error("invalid HEX color “{0}” (expected #rrggbb or #rrggbbaa)")]
    InvalidFormat(String),
    /// The anchor level is not one of the selectable levels.
    #[error("invalid anchor level “{0}”")]
    InvalidLevel(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
