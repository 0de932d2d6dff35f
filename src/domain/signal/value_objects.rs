use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::domain::market_data::{CurrencyPair, MarketState};
use crate::domain::session::{HourWindow, MarketInstant, is_kill_zone, volatility_score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr, Serialize, Deserialize)]
pub enum SignalAction {
    #[strum(serialize = "STRONG BUY")]
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[strum(serialize = "BUY")]
    #[serde(rename = "BUY")]
    Buy,
    #[strum(serialize = "WAIT")]
    #[serde(rename = "WAIT")]
    Wait,
    #[strum(serialize = "SELL")]
    #[serde(rename = "SELL")]
    Sell,
    #[strum(serialize = "STRONG SELL")]
    #[serde(rename = "STRONG SELL")]
    StrongSell,
}

impl SignalAction {
    pub fn is_long(&self) -> bool {
        matches!(self, Self::StrongBuy | Self::Buy)
    }

    pub fn is_short(&self) -> bool {
        matches!(self, Self::StrongSell | Self::Sell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr, Serialize, Deserialize)]
pub enum SignalQuality {
    Safe,
    Unsafe,
}

/// Verdict returned by the analysis backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSignal {
    pub pair: String,
    /// 0-100
    pub score: f64,
    pub action: SignalAction,
    pub reasoning: Vec<String>,
    pub quality: SignalQuality,
    pub tp: f64,
    pub sl: f64,
    pub smt_divergence: bool,
    pub adr_exhausted: bool,
}

impl TradeSignal {
    /// Clamp the score into 0-100; the backend treats the range as advisory.
    pub fn normalized(mut self) -> Self {
        self.score = if self.score.is_finite() { self.score.clamp(0.0, 100.0) } else { 0.0 };
        self
    }

    pub fn rounded_score(&self) -> u8 {
        self.score.round().clamp(0.0, 100.0) as u8
    }
}

/// Calculator output forwarded with every analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub is_kill_zone: bool,
    pub volatility_score: u8,
}

impl SessionContext {
    pub fn at(instant: &MarketInstant, kill_zone: &HourWindow) -> Self {
        Self { is_kill_zone: is_kill_zone(instant, kill_zone), volatility_score: volatility_score(instant) }
    }
}

pub const SYSTEM_INSTRUCTION: &str = "You are a Senior Quant Developer and Trading Mentor.
Analyze Forex data using institutional concepts but EXPLAIN them clearly:
- SMT Divergence: Correlation between Dollar and the Pair.
- Daily Movement (ADR): Market range exhaustion check.
- News Catalysts: Impact of current headlines.
- Institutional Zones: Supply/Demand liquidity nodes.

RULES:
- Provide specific 'tp' and 'sl' prices.
- 'score' is 0-100.
- Output MUST be strictly valid JSON.";

/// Everything sent to the analysis backend for one pair
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub pair: CurrencyPair,
    pub market_state: MarketState,
    pub context: SessionContext,
}

impl AnalysisRequest {
    pub fn new(pair: CurrencyPair, market_state: MarketState, context: SessionContext) -> Self {
        Self { pair, market_state, context }
    }

    pub fn prompt(&self) -> Result<String, serde_json::Error> {
        let state = serde_json::to_string(&self.market_state)?;
        Ok(format!(
            "ENDPOINT CALL: /api/analyze/{pair}\nPAYLOAD:\n- MarketState: {state}\n- KillZone: {kz}\n- VolatilityPulse: {vol}%",
            pair = self.pair,
            state = state,
            kz = self.context.is_kill_zone,
            vol = self.context.volatility_score,
        ))
    }
}

/// Where the live price sits between stop and target, for the verdict mini chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskReward {
    /// 10-90, percent of the SL..TP span
    pub marker_pct: f64,
    pub gain_pips: u32,
    pub risk_pips: u32,
}

impl RiskReward {
    const PIP_FACTOR: f64 = 10_000.0;

    pub fn new(tp: f64, sl: f64, current_price: f64) -> Self {
        let range = (tp - sl).abs();
        let position = if range > 0.0 { (current_price - tp.min(sl)) / range * 100.0 } else { 50.0 };
        Self {
            marker_pct: position.clamp(10.0, 90.0),
            gain_pips: ((tp - current_price) * Self::PIP_FACTOR).round().abs() as u32,
            risk_pips: ((current_price - sl) * Self::PIP_FACTOR).round().abs() as u32,
        }
    }

    /// Chart geometry for a signal, `None` while either level is still unmapped (zero or non-finite)
    pub fn for_targets(tp: f64, sl: f64, current_price: f64) -> Option<Self> {
        let mapped = |level: f64| level.is_finite() && level != 0.0;
        (mapped(tp) && mapped(sl) && current_price.is_finite()).then(|| Self::new(tp, sl, current_price))
    }

    /// Reward-to-risk multiple, `None` when there is no risk distance
    pub fn ratio(&self) -> Option<f64> {
        (self.risk_pips > 0).then(|| self.gain_pips as f64 / self.risk_pips as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_clamps_score() {
        let signal = TradeSignal {
            pair: "EURUSD".into(),
            score: 140.0,
            action: SignalAction::Buy,
            reasoning: vec![],
            quality: SignalQuality::Safe,
            tp: 1.09,
            sl: 1.08,
            smt_divergence: false,
            adr_exhausted: false,
        }
        .normalized();
        assert_eq!(signal.score, 100.0);
        assert_eq!(signal.rounded_score(), 100);
    }

    #[test]
    fn risk_reward_marker_is_clamped() {
        let rr = RiskReward::new(1.0950, 1.0850, 1.0885);
        assert!((rr.marker_pct - 35.0).abs() < 1e-6);
        assert_eq!(rr.gain_pips, 65);
        assert_eq!(rr.risk_pips, 35);

        let beyond = RiskReward::new(1.0950, 1.0850, 1.2000);
        assert_eq!(beyond.marker_pct, 90.0);

        assert!(RiskReward::for_targets(0.0, 1.0850, 1.0885).is_none());
        assert!(RiskReward::for_targets(1.0950, 0.0, 1.0885).is_none());
        assert!(RiskReward::for_targets(1.0950, f64::NAN, 1.0885).is_none());
        assert_eq!(RiskReward::for_targets(1.0950, 1.0850, 1.0885).map(|r| r.gain_pips), Some(65));

        let flat = RiskReward::new(1.0, 1.0, 1.0);
        assert_eq!(flat.marker_pct, 50.0);
        assert_eq!(flat.ratio(), None);
    }
}
