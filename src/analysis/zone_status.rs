use serde::{Deserialize, Serialize};

use crate::config::ANALYSIS;
use crate::utils::maths_utils::valid;

/// Coarse WaveTrend reading shown when the service sends no status text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
pub enum ZoneStatus {
    #[strum(to_string = "Potential buy zone")]
    PotentialBuy,
    #[strum(to_string = "Potential sell zone")]
    PotentialSell,
    #[strum(to_string = "Neutral zone")]
    Neutral,
}

/// WT1 above WT2 deep in oversold reads as a buy zone, the mirror case as a sell zone.
pub fn classify_zone(wt1: f64, wt2: f64) -> ZoneStatus {
    let (Some(wt1), Some(wt2)) = (valid(wt1), valid(wt2)) else {
        return ZoneStatus::Neutral;
    };
    let levels = &ANALYSIS.wavetrend;
    if wt1 > wt2 && wt2 < levels.oversold_1 {
        ZoneStatus::PotentialBuy
    } else if wt1 < wt2 && wt2 > levels.overbought_1 {
        ZoneStatus::PotentialSell
    } else {
        ZoneStatus::Neutral
    }
}
