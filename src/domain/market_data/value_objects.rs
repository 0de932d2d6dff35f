use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter};

use crate::domain::errors::ValidationError;

/// Value Object - six-letter FX/metal pair such as `EURUSD` or `XAUUSD`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyPair(String);

impl CurrencyPair {
    pub fn new(symbol: &str) -> Result<Self, ValidationError> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.len() != 6 || !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidPair(symbol));
        }
        Ok(Self(symbol))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn base(&self) -> &str {
        &self.0[..3]
    }

    pub fn quote(&self) -> &str {
        &self.0[3..]
    }
}

impl TryFrom<&str> for CurrencyPair {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for CurrencyPair {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> Self {
        pair.0
    }
}

const MAJORS: [&str; 8] = ["EURUSD", "GBPUSD", "USDJPY", "AUDUSD", "USDCAD", "USDCHF", "NZDUSD", "XAUUSD"];

const CROSSES: [&str; 10] = [
    "EURGBP", "EURJPY", "GBPJPY", "AUDJPY", "EURAUD", "EURCHF", "GBPCHF", "CADJPY", "NZDJPY", "XAGUSD",
];

fn pairs(symbols: &[&str]) -> Vec<CurrencyPair> {
    symbols.iter().map(|s| CurrencyPair(s.to_string())).collect()
}

/// Quick-access majors
pub fn major_pairs() -> Vec<CurrencyPair> {
    pairs(&MAJORS)
}

/// Majors followed by the expanded cross list
pub fn all_pairs() -> Vec<CurrencyPair> {
    pairs(&MAJORS.iter().chain(CROSSES.iter()).copied().collect::<Vec<_>>())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyStrength {
    pub symbol: String,
    /// -100 (weakest) to 100 (strongest)
    pub strength: f64,
    pub change: f64,
}

/// Retail positioning, `long + short == 100`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSentiment {
    pub pair: String,
    pub long: u8,
    pub short: u8,
}

impl MarketSentiment {
    pub fn from_long(pair: &str, long: u8) -> Self {
        let long = long.min(100);
        Self { pair: pair.to_string(), long, short: 100 - long }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter, AsRefStr, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEvent {
    pub id: String,
    pub time: String,
    pub currency: String,
    pub impact: Impact,
    pub event: String,
    /// -10 (bearish) to 10 (bullish)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalyst_score: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr, Serialize, Deserialize)]
pub enum ZoneBias {
    #[strum(serialize = "Buying Zone")]
    #[serde(rename = "Buying Zone")]
    Buying,
    #[strum(serialize = "Selling Zone")]
    #[serde(rename = "Selling Zone")]
    Selling,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityZone {
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    /// 1-5
    pub strength: u8,
    pub bias: ZoneBias,
}

/// Average-daily-range consumption
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdrInfo {
    pub current_pips: u32,
    pub average_pips: u32,
    pub percentage_used: u32,
}

impl AdrInfo {
    pub const EXHAUSTION_PCT: u32 = 90;

    pub fn is_exhausted(&self) -> bool {
        self.percentage_used >= Self::EXHAUSTION_PCT
    }

    /// Width of the meter fill, capped at 100
    pub fn fill_pct(&self) -> u32 {
        self.percentage_used.min(100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr, Serialize, Deserialize)]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

/// Dollar index reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DxyReading {
    pub price: f64,
    pub trend: Trend,
}

/// Snapshot of everything the dashboard shows and the analysis prompt embeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketState {
    pub currencies: Vec<CurrencyStrength>,
    pub sentiment: Vec<MarketSentiment>,
    pub news: Vec<NewsEvent>,
    pub dxy: DxyReading,
    /// 0-100
    pub volatility: u8,
    pub liquidity_zones: Vec<LiquidityZone>,
    pub adr: AdrInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_validation() {
        assert_eq!(CurrencyPair::new(" eurusd ").unwrap().value(), "EURUSD");
        assert!(CurrencyPair::new("EURUS").is_err());
        assert!(CurrencyPair::new("EUR/US").is_err());
        let gold = CurrencyPair::new("XAUUSD").unwrap();
        assert_eq!((gold.base(), gold.quote()), ("XAU", "USD"));
    }

    #[test]
    fn deserialized_pair_is_validated() {
        let pair: CurrencyPair = serde_json::from_str("\"gbpjpy\"").unwrap();
        assert_eq!((pair.base(), pair.quote()), ("GBP", "JPY"));
        assert_eq!(serde_json::to_string(&pair).unwrap(), "\"GBPJPY\"");
        assert!(serde_json::from_str::<CurrencyPair>("\"EU\"").is_err());
    }

    #[test]
    fn all_pairs_start_with_majors() {
        let all = all_pairs();
        assert_eq!(&all[..8], major_pairs().as_slice());
        assert_eq!(all.len(), 18);
    }

    #[test]
    fn adr_exhaustion_threshold() {
        let adr = AdrInfo { current_pips: 120, average_pips: 105, percentage_used: 114 };
        assert!(adr.is_exhausted());
        assert_eq!(adr.fill_pct(), 100);
        let fresh = AdrInfo { current_pips: 78, average_pips: 105, percentage_used: 74 };
        assert!(!fresh.is_exhausted());
    }

    #[test]
    fn zone_serializes_with_display_labels() {
        let zone = LiquidityZone {
            kind: "Unmitigated Price Gap".into(),
            price: 1.096,
            strength: 4,
            bias: ZoneBias::Selling,
        };
        let json = serde_json::to_value(&zone).unwrap();
        assert_eq!(json["type"], "Unmitigated Price Gap");
        assert_eq!(json["bias"], "Selling Zone");
    }
}
