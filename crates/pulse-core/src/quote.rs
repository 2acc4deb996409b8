use serde::{Deserialize, Serialize};

/// Normalized price/change snapshot for a single ticker symbol.
///
/// A `Quote` is either fully populated or not produced at all; there is no
/// partially-filled state. Change is always measured against the true previous
/// session close, and both change fields carry the same sign.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub previous_close: f64,
    pub change: f64,
    pub change_pct: f64,
}

impl Quote {
    /// Build a `Quote` from the raw last-price/previous-close pair of a
    /// provider response.
    ///
    /// Returns `None` whenever either field is missing, non-finite, or the
    /// previous close is zero; the percentage change is undefined in those
    /// cases and no division is attempted.
    pub fn normalize(symbol: &str, price: Option<f64>, previous_close: Option<f64>) -> Option<Quote> {
        let price = price.filter(|p| p.is_finite())?;
        let previous_close = previous_close.filter(|p| p.is_finite() && *p != 0.0)?;

        let change = price - previous_close;
        Some(Quote {
            symbol: symbol.to_string(),
            price,
            previous_close,
            change,
            change_pct: change / previous_close * 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_fields_agree() {
        let quote = Quote::normalize("AAPL", Some(150.1234), Some(148.0)).unwrap();
        assert!((quote.change - 2.1234).abs() < 1e-9);
        assert!((quote.change_pct - (150.1234 - 148.0) / 148.0 * 100.0).abs() < 1e-9);
        assert_eq!(quote.change > 0.0, quote.change_pct > 0.0);
    }

    #[test]
    fn negative_change_shares_sign() {
        let quote = Quote::normalize("MSFT", Some(95.0), Some(100.0)).unwrap();
        assert!(quote.change < 0.0);
        assert!(quote.change_pct < 0.0);
        assert!((quote.change_pct - -5.0).abs() < 1e-9);
    }

    #[test]
    fn zero_previous_close_is_absent() {
        assert_eq!(Quote::normalize("XYZ", Some(4.231), Some(0.0)), None);
    }

    #[test]
    fn missing_fields_are_absent() {
        assert_eq!(Quote::normalize("XYZ", None, Some(10.0)), None);
        assert_eq!(Quote::normalize("XYZ", Some(10.0), None), None);
        assert_eq!(Quote::normalize("XYZ", None, None), None);
    }

    #[test]
    fn non_finite_inputs_are_absent() {
        assert_eq!(Quote::normalize("XYZ", Some(f64::NAN), Some(10.0)), None);
        assert_eq!(Quote::normalize("XYZ", Some(10.0), Some(f64::INFINITY)), None);
    }
}
