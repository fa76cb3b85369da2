//! Custom error types for the wordy-nums crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum WordyError {
    /// The input falls outside the supported numeric range.
    #[error("Number out of range: {number}. Supported range is 0 to {max}.")]
    OutOfRange { number: i64, max: u32 },

    /// The teen-case precondition was violated: the tens digit read as 1 but
    /// the remainder was not in 10..=19. Indicates a defect in the driving
    /// loop, never a problem with user input.
    #[error("Inconsistent teen state: remainder {remainder} is not in 10..=19")]
    InconsistentTeens { remainder: u32 },
}

/// A convenience `Result` type alias using the crate's `WordyError` type.
pub type Result<T> = std::result::Result<T, WordyError>;
