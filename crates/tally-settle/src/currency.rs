//! ISO 4217 currency codes and their minor-unit digits.

/// Digits used for a currency missing from the table.
pub const DEFAULT_DIGITS: u32 = 2;

/// (code, decimal digits), sorted by code.
const CURRENCIES: &[(&str, u32)] = &[
    ("AED", 2),
    ("AUD", 2),
    ("BHD", 3),
    ("BRL", 2),
    ("CAD", 2),
    ("CHF", 2),
    ("CLP", 0),
    ("CNY", 2),
    ("CZK", 2),
    ("DKK", 2),
    ("EUR", 2),
    ("GBP", 2),
    ("HKD", 2),
    ("HUF", 2),
    ("IDR", 2),
    ("ILS", 2),
    ("INR", 2),
    ("ISK", 0),
    ("JOD", 3),
    ("JPY", 0),
    ("KRW", 0),
    ("KWD", 3),
    ("MXN", 2),
    ("NOK", 2),
    ("NZD", 2),
    ("OMR", 3),
    ("PHP", 2),
    ("PLN", 2),
    ("SEK", 2),
    ("SGD", 2),
    ("THB", 2),
    ("TND", 3),
    ("TRY", 2),
    ("TWD", 2),
    ("USD", 2),
    ("VND", 0),
    ("ZAR", 2),
];

/// Look up the decimal digits of a currency code, ignoring case.
pub fn lookup(code: &str) -> Option<u32> {
    let code = code.trim().to_ascii_uppercase();
    CURRENCIES
        .binary_search_by(|(candidate, _)| candidate.cmp(&code.as_str()))
        .ok()
        .map(|i| CURRENCIES[i].1)
}

/// Decimal digits for a currency code, falling back to [`DEFAULT_DIGITS`].
pub fn digits_for(code: &str) -> u32 {
    lookup(code).unwrap_or(DEFAULT_DIGITS)
}

/// Every known currency code.
pub fn codes() -> impl Iterator<Item = &'static str> {
    CURRENCIES.iter().map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        let codes: Vec<_> = codes().collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("EUR"), Some(2));
        assert_eq!(lookup("jpy"), Some(0));
        assert_eq!(lookup(" KWD "), Some(3));
        assert_eq!(lookup("XXX"), None);
    }

    #[test]
    fn test_unknown_currency_defaults() {
        assert_eq!(digits_for("XXX"), DEFAULT_DIGITS);
        assert_eq!(digits_for("BHD"), 3);
    }
}
