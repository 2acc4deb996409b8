use crate::quote::Quote;
use serde::{Deserialize, Serialize};

/// Card text shown when a symbol produced no quote this cycle.
pub const UNAVAILABLE_TEXT: &str = "Data Unavailable";

/// Formatting family of a ticker symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// CBOE treasury yield indexes; quoted as a percentage, not a price.
    TreasuryYield,
    /// Yahoo-style FX pairs (`EURUSD=X`); four decimals, no currency marker.
    CurrencyPair,
    Standard,
}

impl SymbolClass {
    pub fn of(symbol: &str) -> SymbolClass {
        match symbol {
            "^TNX" | "^TYX" | "^FVX" | "^IRX" => SymbolClass::TreasuryYield,
            s if s.ends_with("=X") => SymbolClass::CurrencyPair,
            _ => SymbolClass::Standard,
        }
    }
}

/// Up/down coloring of a card. Zero change counts as up.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    pub fn of(change: f64) -> Tone {
        if change >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    /// CSS class name used by the rendering surface.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
        }
    }

    pub fn arrow(&self) -> char {
        match self {
            Tone::Positive => '▲',
            Tone::Negative => '▼',
        }
    }
}

/// Everything the rendering surface needs to draw one ticker card.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRecord {
    Quote {
        price_text: String,
        change_text: String,
        tone: Tone,
        arrow: char,
    },
    Unavailable,
}

/// Render a quote (or its absence) into display text.
///
/// Price precision, first match wins: treasury yields get three decimals and a
/// `%` suffix; currency pairs four decimals; then price bands at 1 and 10.
/// Only the banded prices carry the `$` marker.
pub fn format(quote: Option<&Quote>) -> DisplayRecord {
    let Some(quote) = quote else {
        return DisplayRecord::Unavailable;
    };

    let price = quote.price;
    let price_text = match SymbolClass::of(&quote.symbol) {
        SymbolClass::TreasuryYield => format!("{price:.3}%"),
        SymbolClass::CurrencyPair => format!("{price:.4}"),
        SymbolClass::Standard if price < 1.0 => format!("${price:.4}"),
        SymbolClass::Standard if price < 10.0 => format!("${price:.3}"),
        SymbolClass::Standard => format!("${price:.2}"),
    };

    let sign = if quote.change >= 0.0 { "+" } else { "" };
    let tone = Tone::of(quote.change);

    DisplayRecord::Quote {
        price_text,
        change_text: format!("{sign}{:.2}%", quote.change_pct),
        tone,
        arrow: tone.arrow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, price: f64, previous_close: f64) -> Quote {
        Quote::normalize(symbol, Some(price), Some(previous_close)).unwrap()
    }

    #[test]
    fn standard_symbol_two_decimals() {
        let record = format(Some(&quote("AAPL", 150.1234, 148.0)));
        assert_eq!(
            record,
            DisplayRecord::Quote {
                price_text: "$150.12".to_string(),
                change_text: "+1.43%".to_string(),
                tone: Tone::Positive,
                arrow: '▲',
            }
        );
    }

    #[test]
    fn sub_dollar_price_four_decimals() {
        let record = format(Some(&quote("SIRI", 0.534, 0.5)));
        match record {
            DisplayRecord::Quote { price_text, tone, .. } => {
                assert_eq!(price_text, "$0.5340");
                assert_eq!(tone, Tone::Positive);
            }
            DisplayRecord::Unavailable => panic!("expected a populated record"),
        }
    }

    #[test]
    fn single_digit_price_three_decimals() {
        let record = format(Some(&quote("F", 4.231, 4.0)));
        match record {
            DisplayRecord::Quote { price_text, .. } => assert_eq!(price_text, "$4.231"),
            DisplayRecord::Unavailable => panic!("expected a populated record"),
        }
    }

    #[test]
    fn treasury_yield_is_a_percentage() {
        let record = format(Some(&quote("^TNX", 4.521, 4.4)));
        match record {
            DisplayRecord::Quote { price_text, .. } => assert_eq!(price_text, "4.521%"),
            DisplayRecord::Unavailable => panic!("expected a populated record"),
        }
    }

    #[test]
    fn currency_pair_four_decimals_no_marker() {
        let record = format(Some(&quote("EURUSD=X", 1.0823, 1.08)));
        match record {
            DisplayRecord::Quote { price_text, .. } => assert_eq!(price_text, "1.0823"),
            DisplayRecord::Unavailable => panic!("expected a populated record"),
        }
    }

    #[test]
    fn precision_ignores_sign_of_change() {
        let up = format(Some(&quote("F", 4.231, 4.0)));
        let down = format(Some(&quote("F", 4.231, 4.5)));
        let text = |record: DisplayRecord| match record {
            DisplayRecord::Quote { price_text, .. } => price_text,
            DisplayRecord::Unavailable => panic!("expected a populated record"),
        };
        assert_eq!(text(up), text(down));
    }

    #[test]
    fn zero_change_is_positive() {
        let record = format(Some(&quote("AAPL", 148.0, 148.0)));
        match record {
            DisplayRecord::Quote { change_text, tone, arrow, .. } => {
                assert_eq!(change_text, "+0.00%");
                assert_eq!(tone, Tone::Positive);
                assert_eq!(arrow, '▲');
            }
            DisplayRecord::Unavailable => panic!("expected a populated record"),
        }
    }

    #[test]
    fn negative_change_keeps_bare_minus() {
        let record = format(Some(&quote("MSFT", 95.0, 100.0)));
        match record {
            DisplayRecord::Quote { change_text, tone, arrow, .. } => {
                assert_eq!(change_text, "-5.00%");
                assert_eq!(tone, Tone::Negative);
                assert_eq!(arrow, '▼');
            }
            DisplayRecord::Unavailable => panic!("expected a populated record"),
        }
    }

    #[test]
    fn absent_quote_maps_to_unavailable() {
        assert_eq!(format(None), DisplayRecord::Unavailable);
        assert_eq!(
            format(Quote::normalize("XYZ", Some(4.231), Some(0.0)).as_ref()),
            DisplayRecord::Unavailable
        );
    }

    #[test]
    fn symbol_classes_are_stable() {
        assert_eq!(SymbolClass::of("^TNX"), SymbolClass::TreasuryYield);
        assert_eq!(SymbolClass::of("GBPUSD=X"), SymbolClass::CurrencyPair);
        assert_eq!(SymbolClass::of("^GSPC"), SymbolClass::Standard);
        assert_eq!(SymbolClass::of("BTC-USD"), SymbolClass::Standard);
    }
}
