use super::value_objects::{CurrencyPair, CurrencyStrength, DxyReading, MarketState, Trend};

/// Domain service for reading a market snapshot
pub struct MarketAnalysisService;

impl MarketAnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Currencies ordered strongest first; ties keep input order
    pub fn rank_by_strength(&self, currencies: &[CurrencyStrength]) -> Vec<CurrencyStrength> {
        let mut ranked = currencies.to_vec();
        ranked.sort_by(|a, b| b.strength.total_cmp(&a.strength));
        ranked
    }

    /// Strongest vs weakest currency, the pairing the strength meter highlights
    pub fn strongest_and_weakest<'a>(
        &self,
        currencies: &'a [CurrencyStrength],
    ) -> Option<(&'a CurrencyStrength, &'a CurrencyStrength)> {
        let strongest = currencies.iter().max_by(|a, b| a.strength.total_cmp(&b.strength))?;
        let weakest = currencies.iter().min_by(|a, b| a.strength.total_cmp(&b.strength))?;
        Some((strongest, weakest))
    }

    /// Indicative pair price derived from the dollar index; the demo feed carries no quotes.
    pub fn reference_price(&self, pair: &CurrencyPair, dxy: &DxyReading) -> f64 {
        let premium = if pair.contains("EUR") { 0.05 } else { 0.08 };
        dxy.price / 100.0 + premium
    }

    pub fn dollar_is_bullish(&self, state: &MarketState) -> bool {
        state.dxy.trend == Trend::Bullish
    }
}

impl Default for MarketAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}
