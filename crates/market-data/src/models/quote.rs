use serde::{Deserialize, Serialize};

/// Direction of a quote's move since the previous close.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
}

/// Snapshot quote for one symbol.
///
/// Index symbols are carried in the same shape as equities and are
/// recognized by their `^` prefix (e.g. `^GSPC`, `^DJI`). They get a
/// compact rendering without the caret and without cents.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    /// Ticker symbol as requested (e.g. "AAPL", "^GSPC")
    pub symbol: String,

    /// Regular market price
    pub price: f64,

    /// Absolute change since the previous close
    pub change: f64,

    /// Change since the previous close, in percent
    pub change_percent: f64,

    /// Trading volume (indices usually have none)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

impl StockQuote {
    /// Create a quote without volume data.
    pub fn new(symbol: impl Into<String>, price: f64, change: f64, change_percent: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            change,
            change_percent,
            volume: None,
        }
    }

    /// A zero move counts as up, so a flat market renders green.
    pub fn direction(&self) -> ChangeDirection {
        if self.change >= 0.0 {
            ChangeDirection::Up
        } else {
            ChangeDirection::Down
        }
    }

    /// Dollar price with cents, e.g. `$235.45`.
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Signed percent change with one decimal, e.g. `+1.0%` or `-3.2%`.
    ///
    /// Negative values carry their own sign from the number itself.
    pub fn formatted_change(&self) -> String {
        let sign = if self.change >= 0.0 { "+" } else { "" };
        format!("{}{:.1}%", sign, self.change_percent)
    }

    /// Whether this quote is for a market index rather than an equity.
    pub fn is_index(&self) -> bool {
        self.symbol.starts_with('^')
    }

    /// Symbol as shown in the ticker: indices lose the caret and are
    /// clamped to four characters (`^GSPC` -> `GSPC`).
    pub fn display_symbol(&self) -> String {
        if self.is_index() {
            self.symbol.chars().skip(1).take(4).collect::<String>().to_uppercase()
        } else {
            self.symbol.clone()
        }
    }

    /// Price as shown in the ticker: indices render as whole points,
    /// equities keep their cents.
    pub fn display_price(&self) -> String {
        if self.is_index() {
            format!("{:.0}", self.price)
        } else {
            self.formatted_price()
        }
    }
}
