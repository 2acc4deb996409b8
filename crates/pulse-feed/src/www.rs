const BASE: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Chart URL whose `meta` block carries the last trade price and the true
/// previous session close; the series itself is ignored on the quote path.
pub fn quote_url(ticker: &str) -> String {
    chart_url(ticker, "1d", "1d")
}

pub fn chart_url(ticker: &str, interval: &str, range: &str) -> String {
    let tckr = ticker.to_uppercase();
    format!("{BASE}/{tckr}?symbol={tckr}&interval={interval}&range={range}")
}
