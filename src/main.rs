use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};

use wordy_nums::WordyTranslator;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-number-file>", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("ERROR: Failed to open {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let mut translator = WordyTranslator::new();
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("ERROR: Failed to read line: {}", e);
                std::process::exit(1);
            }
        };

        let raw = line.trim();
        match translator.translate(parse_lenient(raw)) {
            Ok(words) => println!("in: {}, out: {}", raw, words),
            // Out-of-range lines are reported and skipped; the run continues.
            Err(e) => eprintln!("in: {}, error: {}", raw, e),
        }
    }
}

/// Lenient line-to-integer parsing: an optional sign followed by leading
/// decimal digits. Anything else (including empty lines) parses as 0.
fn parse_lenient(text: &str) -> i64 {
    let trimmed = text.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<i64>().map_or(0, |n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::parse_lenient;

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_lenient("42"), 42);
        assert_eq!(parse_lenient("  7  "), 7);
        assert_eq!(parse_lenient("-12"), -12);
        assert_eq!(parse_lenient("+9"), 9);
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(parse_lenient("12abc"), 12);
        assert_eq!(parse_lenient("3 4"), 3);
    }

    #[test]
    fn non_numeric_input_parses_as_zero() {
        assert_eq!(parse_lenient("abc"), 0);
        assert_eq!(parse_lenient(""), 0);
        assert_eq!(parse_lenient("-"), 0);
    }
}
