//! Position handlers: one formatting rule per decimal digit position.
//!
//! Each handler is a pure function from `(digit, ten_powered, remainder)` to
//! a [`PositionResult`], collected in a table indexed by the position
//! exponent. Extending the supported range means appending a handler for the
//! next power of ten.

use super::error::{Result, WordyError};
use super::models::{ConversionState, PositionResult};
use super::tables::{ONES, TEENS, TENS};

/// Computes the word fragment and consumed value for the digit at one
/// decimal position. The tens handler needs the full remainder, not just the
/// digit, to detect the teen range.
type Handler = fn(digit: u32, ten_powered: u32, remainder: u32) -> Result<PositionResult>;

/// Handler table indexed by position exponent (0 = ones, 1 = tens,
/// 2 = hundreds).
pub(crate) const HANDLERS: [Handler; 3] = [ones, tens, hundreds];

/// Largest value the handler table can convert.
pub(crate) const MAX_VALUE: u32 = 10u32.pow(HANDLERS.len() as u32) - 1;

/// Convert the digit at `position` (worth 10^position) and update the state:
/// append the fragment, subtract the consumed value.
///
/// Positions holding a zero digit are skipped silently, so 5 renders as
/// "five" rather than "zero hundred zero ... five".
pub(crate) fn process_position(position: usize, state: &mut ConversionState) -> Result<()> {
    let ten_powered = 10u32.pow(position as u32);
    if state.remainder < ten_powered {
        return Ok(()); // no digit left at this position
    }

    let digit = state.remainder / ten_powered;
    let result = HANDLERS[position](digit, ten_powered, state.remainder)?;
    state.consume(result);
    Ok(())
}

/// Position 0: single digits.
fn ones(digit: u32, ten_powered: u32, _remainder: u32) -> Result<PositionResult> {
    Ok(PositionResult {
        fragment: ONES[digit as usize].to_string(),
        consumed: ten_powered * digit,
    })
}

/// Position 1: tens, with the irregular teen range fused into one word.
fn tens(digit: u32, ten_powered: u32, remainder: u32) -> Result<PositionResult> {
    if digit == 1 {
        // 10-19 use a single word that also consumes the ones digit, which
        // leaves nothing for position 0 to do.
        if !(10..=19).contains(&remainder) {
            return Err(WordyError::InconsistentTeens { remainder });
        }
        return Ok(PositionResult {
            fragment: TEENS[(remainder - 10) as usize].to_string(),
            consumed: remainder,
        });
    }

    Ok(PositionResult {
        fragment: TENS[digit as usize].to_string(),
        consumed: ten_powered * digit,
    })
}

/// Position 2: hundreds.
fn hundreds(digit: u32, ten_powered: u32, _remainder: u32) -> Result<PositionResult> {
    Ok(PositionResult {
        fragment: format!("{} hundred", ONES[digit as usize]),
        consumed: ten_powered * digit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_value_tracks_handler_count() {
        assert_eq!(MAX_VALUE, 999);
    }

    #[test]
    fn ones_handler_consumes_the_digit() {
        let result = ones(7, 1, 7).unwrap();
        assert_eq!(result.fragment, "seven");
        assert_eq!(result.consumed, 7);
    }

    #[test]
    fn tens_handler_fuses_teens_into_one_word() {
        let result = tens(1, 10, 13).unwrap();
        assert_eq!(result.fragment, "thirteen");
        assert_eq!(result.consumed, 13, "a teen word consumes both digits");
    }

    #[test]
    fn tens_handler_leaves_the_ones_digit_for_non_teens() {
        let result = tens(4, 10, 45).unwrap();
        assert_eq!(result.fragment, "forty");
        assert_eq!(result.consumed, 40);
    }

    #[test]
    fn tens_handler_rejects_an_inconsistent_teen_state() {
        let err = tens(1, 10, 113).unwrap_err();
        assert!(matches!(err, WordyError::InconsistentTeens { remainder: 113 }));
    }

    #[test]
    fn hundreds_handler_appends_the_scale_word() {
        let result = hundreds(7, 100, 712).unwrap();
        assert_eq!(result.fragment, "seven hundred");
        assert_eq!(result.consumed, 700);
    }

    #[test]
    fn zero_digit_positions_are_skipped() {
        let mut state = ConversionState::new(5);
        process_position(2, &mut state).unwrap();
        process_position(1, &mut state).unwrap();
        assert!(state.fragments.is_empty(), "empty positions contribute nothing");
        assert_eq!(state.remainder, 5);
    }
}
