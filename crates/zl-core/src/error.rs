//! Error types for character generation.

/// Errors that can occur while generating a character.
///
/// Every variant points at malformed or incomplete input tables; none of
/// them is retried.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// A die roll matched no entry of the named table.
    #[error("no {table} entry for roll {roll}")]
    LookupExhausted {
        /// Which table was searched.
        table: &'static str,
        /// The value that was rolled.
        roll: u32,
    },

    /// A trained weapon has no row in the weapon table.
    #[error("weapon '{0}' not found in weapons table")]
    WeaponNotFound(String),

    /// A roll specifier is neither a number nor a `start-end` range.
    #[error("invalid roll specifier: {0:?}")]
    InvalidRoll(String),
}

/// Convenience result type for generation operations.
pub type GenResult<T> = Result<T, GenError>;
