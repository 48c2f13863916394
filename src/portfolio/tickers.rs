//! Ticker list validation and tokenizing.

use once_cell::sync::Lazy;
use regex::Regex;

/// One or more comma separated groups of 1 to 5 ASCII letters, with optional
/// ASCII whitespace after each comma.
static TICKER_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{1,5}(,(?-u:\s)*[A-Za-z]{1,5})*$").expect("ticker pattern is valid")
});

/// Check a raw ticker list against the accepted syntax.
///
/// No normalization happens here: leading whitespace, trailing commas and
/// empty groups are all rejected.
pub fn is_valid_ticker_list(input: &str) -> bool {
    TICKER_LIST.is_match(input)
}

/// Validate input that may be absent. Absent input is never valid.
pub fn validate_input(input: Option<&str>) -> bool {
    input.is_some_and(is_valid_ticker_list)
}

/// Strip leading and trailing spaces and control characters.
///
/// Non-ASCII whitespace such as NBSP is kept, so it still fails validation.
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c <= ' ')
}

/// Split a raw ticker list on commas and trim each piece.
///
/// Order and duplicates are preserved.
pub fn split_tickers(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| trim_input(s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_lists() {
        assert!(is_valid_ticker_list("AAPL"));
        assert!(is_valid_ticker_list("AAPL, MSFT"));
        assert!(is_valid_ticker_list("AAPL,MSFT,GOOG"));
        assert!(is_valid_ticker_list("aapl,  msft"));
        assert!(is_valid_ticker_list("A,BRKB"));
    }

    #[test]
    fn test_invalid_lists() {
        assert!(!is_valid_ticker_list(""));
        assert!(!is_valid_ticker_list("AAPL123"));
        assert!(!is_valid_ticker_list("TOOLONGTICKER"));
        assert!(!is_valid_ticker_list("AAPL,"));
        assert!(!is_valid_ticker_list(",AAPL"));
        assert!(!is_valid_ticker_list("AAPL,,MSFT"));
        assert!(!is_valid_ticker_list("AAPL ,MSFT"));
        assert!(!is_valid_ticker_list("BRK.B"));
        assert!(!is_valid_ticker_list(" AAPL"));
    }

    #[test]
    fn test_only_ascii_whitespace_is_accepted() {
        assert!(is_valid_ticker_list("AAPL,\tMSFT"));
        assert!(!is_valid_ticker_list("AAPL,\u{a0}MSFT"));
        assert!(!is_valid_ticker_list("AAPL,\u{2003}MSFT"));
    }

    #[test]
    fn test_trim_input_keeps_unicode_whitespace() {
        assert_eq!(trim_input(" \tAAPL, MSFT\r\n"), "AAPL, MSFT");
        assert_eq!(trim_input("\u{a0}AAPL"), "\u{a0}AAPL");
        assert!(!is_valid_ticker_list(trim_input("\u{a0}AAPL\u{a0}")));
    }

    #[test]
    fn test_absent_input_is_invalid() {
        assert!(!validate_input(None));
        assert!(validate_input(Some("MSFT")));
        assert!(!validate_input(Some("")));
    }

    #[test]
    fn test_split_trims_and_preserves_order() {
        assert_eq!(split_tickers("AAPL, MSFT"), vec!["AAPL", "MSFT"]);
        assert_eq!(split_tickers("GOOG,AAPL"), vec!["GOOG", "AAPL"]);
    }

    #[test]
    fn test_split_keeps_duplicates() {
        assert_eq!(split_tickers("AAPL, AAPL"), vec!["AAPL", "AAPL"]);
    }
}
