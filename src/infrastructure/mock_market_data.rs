use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::domain::logging::LogComponent;
use crate::log_debug;
use crate::domain::market_data::{
    AdrInfo, CurrencyStrength, DxyReading, Impact, LiquidityZone, MarketDataSource, MarketSentiment, MarketState,
    NewsEvent, Trend, ZoneBias, all_pairs,
};
use crate::domain::session::{MarketInstant, volatility_score};

/// (symbol, daily change %)
const TRACKED_CURRENCIES: [(&str, f64); 7] = [
    ("USD", 1.2),
    ("EUR", -0.8),
    ("GBP", 0.3),
    ("JPY", -2.1),
    ("AUD", 0.1),
    ("CAD", 0.5),
    ("XAU", 1.1),
];

const DXY_BASE: f64 = 103.85;

/// Demo feed: random strengths and sentiment around a fixed calendar and zone list
pub struct MockMarketDataSource {
    rng: SmallRng,
}

impl MockMarketDataSource {
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Seeded from the browser clock
    pub fn from_clock() -> Self {
        Self::with_seed(js_sys::Date::now() as u64)
    }

    fn currencies(&mut self) -> Vec<CurrencyStrength> {
        TRACKED_CURRENCIES
            .iter()
            .map(|(symbol, change)| CurrencyStrength {
                symbol: symbol.to_string(),
                strength: self.rng.gen_range(-80.0..80.0),
                change: *change,
            })
            .collect()
    }

    fn sentiment(&mut self) -> Vec<MarketSentiment> {
        all_pairs()
            .iter()
            .map(|pair| MarketSentiment::from_long(pair.value(), self.rng.gen_range(25..75)))
            .collect()
    }

    fn dxy(&mut self) -> DxyReading {
        DxyReading {
            price: DXY_BASE + self.rng.gen_range(0.0..0.5),
            trend: if self.rng.gen_bool(0.5) { Trend::Bullish } else { Trend::Bearish },
        }
    }
}

fn calendar() -> Vec<NewsEvent> {
    [
        ("1", "14:30", "USD", Impact::High, "CPI Inflation Release", 8.5),
        ("2", "16:00", "CAD", Impact::Medium, "BoC Interest Rate Decision", -4.2),
        ("3", "19:00", "USD", Impact::Low, "FOMC Member Speech", 1.5),
    ]
    .into_iter()
    .map(|(id, time, currency, impact, event, score)| NewsEvent {
        id: id.to_string(),
        time: time.to_string(),
        currency: currency.to_string(),
        impact,
        event: event.to_string(),
        catalyst_score: Some(score),
    })
    .collect()
}

fn liquidity_zones() -> Vec<LiquidityZone> {
    vec![
        LiquidityZone { kind: "Institutional Buy Order".into(), price: 1.0845, strength: 5, bias: ZoneBias::Buying },
        LiquidityZone { kind: "Unmitigated Price Gap".into(), price: 1.0960, strength: 4, bias: ZoneBias::Selling },
    ]
}

impl MarketDataSource for MockMarketDataSource {
    fn snapshot(&mut self, instant: &MarketInstant) -> MarketState {
        let state = MarketState {
            currencies: self.currencies(),
            sentiment: self.sentiment(),
            news: calendar(),
            dxy: self.dxy(),
            volatility: volatility_score(instant),
            liquidity_zones: liquidity_zones(),
            adr: AdrInfo { current_pips: 78, average_pips: 105, percentage_used: 74 },
        };

        log_debug!(
            LogComponent::Infrastructure("MockFeed"),
            "🎲 Generated snapshot: DXY {:.2} {}, volatility {}",
            state.dxy.price,
            state.dxy.trend,
            state.volatility
        );

        state
    }
}
