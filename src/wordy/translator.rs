//! The transducer entry point: range validation, the driving loop over
//! decimal positions, and last-result retention.

use std::fmt;

use log::debug;

use super::error::{Result, WordyError};
use super::models::ConversionState;
use super::positions::{process_position, HANDLERS, MAX_VALUE};

/// Converts integers in the range 0..=999 to their English word
/// representation.
///
/// Each call to [`translate`](Self::translate) runs a self-contained
/// conversion pass over fresh state; the translator itself only retains the
/// most recent result for echo/debug use.
///
/// ```
/// use wordy_nums::WordyTranslator;
///
/// let mut translator = WordyTranslator::new();
/// assert_eq!(translator.translate(712).unwrap(), "seven hundred twelve");
/// assert_eq!(translator.last_result(), Some("seven hundred twelve"));
/// ```
#[derive(Debug, Default)]
pub struct WordyTranslator {
    last: Option<String>,
}

impl WordyTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate `number` into lowercase English words.
    ///
    /// # Errors
    /// Returns [`WordyError::OutOfRange`] if `number` is negative or greater
    /// than 999. No partial output is produced, and the retained last result
    /// is left untouched.
    pub fn translate(&mut self, number: i64) -> Result<String> {
        let phrase = convert(number)?;
        self.last = Some(phrase.clone());
        Ok(phrase)
    }

    /// The result of the most recent successful
    /// [`translate`](Self::translate) call, or `None` if none has completed
    /// yet.
    pub fn last_result(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

/// Renders the last translated phrase; empty before the first translation.
impl fmt::Display for WordyTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.last_result().unwrap_or(""))
    }
}

/// One-shot convenience: translate a number without keeping a translator
/// around.
pub fn translate(number: i64) -> Result<String> {
    convert(number)
}

/// The conversion pass shared by [`WordyTranslator`] and [`translate`].
fn convert(number: i64) -> Result<String> {
    // Boundary cases that require no position walk
    if number == 0 {
        return Ok("zero".to_string());
    }
    if number < 0 || number > i64::from(MAX_VALUE) {
        return Err(WordyError::OutOfRange {
            number,
            max: MAX_VALUE,
        });
    }

    debug!("translating {}", number);
    let mut state = ConversionState::new(number as u32);

    // Walk positions from most significant to least: 10^2, 10^1, 10^0.
    // A teen consumes the ones digit too, so position 0 then finds an empty
    // remainder and contributes nothing.
    for position in (0..HANDLERS.len()).rev() {
        process_position(position, &mut state)?;
    }
    debug_assert_eq!(state.remainder, 0, "unconsumed remainder after all positions");

    Ok(state.into_phrase())
}
