//! # wordy-nums
//!
//! Converts integers in the range 0..=999 into their lowercase English word
//! representation (e.g., 712 becomes "seven hundred twelve").
//!
//! **Note:** the position handler table is laid out so that extending the
//! range to thousands and beyond only requires appending handlers; the
//! shipped table covers 0-999.
pub mod wordy;

// Re-export the main types for convenience
pub use wordy::{
    error::{Result, WordyError},
    translate,
    WordyTranslator,
};
