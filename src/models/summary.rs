use serde::{Deserialize, Serialize};

use crate::utils::format_utils::{format_fixed2, format_pct, format_price};

/// Scalar snapshot of the latest bar. Normalized values only: no NaN survives in here.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub current_wt1: f64,
    pub current_wt2: f64,
    pub current_mf: f64,
    pub current_price: f64,
    pub price_change_pct: f64,

    // Counts over the service's recent window
    pub buy_signals: u32,
    pub gold_buy_signals: u32,
    pub sell_signals: u32,

    pub last_update: Option<String>,
    pub status: String,
}

/// Display-ready strings for the status/legend widgets.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FormattedSummary {
    pub wt1: String,
    pub wt2: String,
    pub money_flow: String,
    pub price: String,
    pub price_change: String,
    pub buy_signals: String,
    pub gold_buy_signals: String,
    pub sell_signals: String,
    pub last_update: String,
    pub status: String,
}

impl Summary {
    pub fn formatted(&self) -> FormattedSummary {
        FormattedSummary {
            wt1: format_fixed2(self.current_wt1),
            wt2: format_fixed2(self.current_wt2),
            money_flow: format_fixed2(self.current_mf),
            price: format_price(self.current_price),
            price_change: format_pct(self.price_change_pct),
            buy_signals: self.buy_signals.to_string(),
            gold_buy_signals: self.gold_buy_signals.to_string(),
            sell_signals: self.sell_signals.to_string(),
            last_update: self.last_update.clone().unwrap_or_else(|| "--".to_string()),
            status: self.status.clone(),
        }
    }
}
