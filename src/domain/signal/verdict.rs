//! Presentation-independent reading of a verdict: score bands, advice text
//! and the confidence gauge geometry.

use std::f64::consts::{FRAC_PI_2, PI};

use strum::{AsRefStr, Display, EnumIter};

use super::value_objects::TradeSignal;

pub const STRONG_SCORE: f64 = 80.0;
pub const PARTIAL_SCORE: f64 = 55.0;
pub const WEAK_SCORE: f64 = 30.0;

/// Which advisory directive a score earns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
pub enum ScoreBand {
    #[strum(serialize = "Strategic Entry")]
    Strategic,
    #[strum(serialize = "Partial Alignment")]
    Partial,
    #[strum(serialize = "Caution")]
    Caution,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= STRONG_SCORE {
            Self::Strategic
        } else if score >= PARTIAL_SCORE {
            Self::Partial
        } else {
            Self::Caution
        }
    }
}

/// Colour family of the recommended-action box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum VerdictTone {
    Positive,
    Neutral,
    Negative,
}

impl VerdictTone {
    /// `>= 80` positive, `<= 30` negative
    pub fn of(score: f64) -> Self {
        if score >= STRONG_SCORE {
            Self::Positive
        } else if score <= WEAK_SCORE {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Advisory directive shown under the recommended action
pub fn advice(signal: &TradeSignal, pair: &str) -> String {
    match ScoreBand::of(signal.score) {
        ScoreBand::Strategic => format!(
            "STRATEGIC ENTRY DETECTED: Confluence is maxed. Enter {} at current price levels. Targets: {:.5}. Risk Managed at: {:.5}.",
            pair, signal.tp, signal.sl
        ),
        ScoreBand::Partial => "PARTIAL ALIGNMENT: Institutional footprint visible but liquidity not fully captured. \
             Scale-in with smaller risk. Monitor Dollar Index for confirmation."
            .to_string(),
        ScoreBand::Caution => "CAUTION ADVISED: High conflict between Dollar trend and Asset sentiment. \
             Market is currently 'choppy'. Stay on the sidelines until New York session overlap."
            .to_string(),
    }
}

pub const GAUGE_LABEL: &str = "CONFLUENCE CONFIDENCE";

const GAUGE_STOPS: [(f64, (u8, u8, u8)); 3] = [
    (0.0, (0xf4, 0x3f, 0x5e)),
    (50.0, (0xf5, 0x9e, 0x0b)),
    (100.0, (0x10, 0xb9, 0x81)),
];

/// Gauge fill: red at 0, amber at 50, green at 100, linear in between.
pub fn confidence_color(score: f64) -> String {
    let score = if score.is_finite() { score.clamp(0.0, 100.0) } else { 0.0 };
    let (lo, hi) = if score <= GAUGE_STOPS[1].0 {
        (GAUGE_STOPS[0], GAUGE_STOPS[1])
    } else {
        (GAUGE_STOPS[1], GAUGE_STOPS[2])
    };
    let t = (score - lo.0) / (hi.0 - lo.0);
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    let (r, g, b) = (mix(lo.1.0, hi.1.0), mix(lo.1.1, hi.1.1), mix(lo.1.2, hi.1.2));
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Angle of the gauge needle in radians, `-PI/2` at 0 through `PI/2` at 100.
pub fn gauge_angle(score: f64) -> f64 {
    let score = if score.is_finite() { score.clamp(0.0, 100.0) } else { 0.0 };
    score / 100.0 * PI - FRAC_PI_2
}

/// SVG path of a half-ring arc from the left end to `angle`, centred at
/// `(cx, cy)`; angles are measured clockwise from twelve o'clock.
pub fn gauge_arc_path(cx: f64, cy: f64, outer: f64, inner: f64, angle: f64) -> String {
    let start = -FRAC_PI_2;
    let point = |r: f64, a: f64| (cx + r * a.sin(), cy - r * a.cos());
    let (ox0, oy0) = point(outer, start);
    let (ox1, oy1) = point(outer, angle);
    let (ix1, iy1) = point(inner, angle);
    let (ix0, iy0) = point(inner, start);
    format!(
        "M {ox0:.2} {oy0:.2} A {outer} {outer} 0 0 1 {ox1:.2} {oy1:.2} L {ix1:.2} {iy1:.2} A {inner} {inner} 0 0 0 {ix0:.2} {iy0:.2} Z"
    )
}
