use std::collections::HashSet;
use strum::{AsRefStr, Display, EnumIter};

use crate::domain::errors::SignalError;
use crate::domain::signal::TradeSignal;

/// Collapsible dashboard panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
pub enum DashboardSection {
    #[strum(serialize = "Currency Power")]
    Strength,
    #[strum(serialize = "Range Exhaustion")]
    Adr,
    #[strum(serialize = "Target Selection")]
    Target,
    #[strum(serialize = "Economic Pulse")]
    News,
    #[strum(serialize = "Predictive Verdict")]
    Analysis,
    #[strum(serialize = "Institutional Liquidity Nodes")]
    Liquidity,
    #[strum(serialize = "Dollar Index (DXY)")]
    Dollar,
    #[strum(serialize = "Market Timeline")]
    Timeline,
}

/// Which panels are collapsed. Everything starts visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionVisibility {
    hidden: HashSet<DashboardSection>,
}

impl SectionVisibility {
    pub fn is_visible(&self, section: DashboardSection) -> bool {
        !self.hidden.contains(&section)
    }

    pub fn toggle(&mut self, section: DashboardSection) {
        if !self.hidden.remove(&section) {
            self.hidden.insert(section);
        }
    }
}

/// Floating menu: shown once the header scrolls away, opened on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
    pub sticky: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A press anywhere outside the menu dismisses it.
    pub fn on_pointer_down(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.close();
        }
    }

    /// `header_bottom` is the header's bottom edge relative to the viewport.
    pub fn on_scroll(&mut self, header_bottom: f64) {
        self.sticky = header_bottom < 0.0;
    }
}

/// What the verdict panel shows; an error always wins over a stale signal.
#[derive(Debug, Clone, PartialEq)]
pub enum VerdictView {
    Error(SignalError),
    Signal(TradeSignal),
    Standby,
}

impl VerdictView {
    pub fn resolve(error: Option<SignalError>, signal: Option<TradeSignal>) -> Self {
        match (error, signal) {
            (Some(error), _) => Self::Error(error),
            (None, Some(signal)) => Self::Signal(signal),
            (None, None) => Self::Standby,
        }
    }
}
