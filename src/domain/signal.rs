use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::Polarity;

/// Category tag of a discrete signal event.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
pub enum SignalKind {
    #[strum(to_string = "Buy")]
    Buy,
    #[strum(to_string = "Gold Buy")]
    GoldBuy,
    #[strum(to_string = "Sell")]
    Sell,
    #[strum(to_string = "Cross")]
    Cross,

    // WT2 / money flow against price
    #[strum(to_string = "Bullish Div")]
    BullishDiv,
    #[strum(to_string = "Bearish Div")]
    BearishDiv,
    #[strum(to_string = "Hidden Bullish Div")]
    HiddenBullishDiv,
    #[strum(to_string = "Hidden Bearish Div")]
    HiddenBearishDiv,
    #[strum(to_string = "MF Bullish Div")]
    MfBullishDiv,
    #[strum(to_string = "MF Bearish Div")]
    MfBearishDiv,

    // Secondary entry patterns
    #[strum(to_string = "Fast Money Buy")]
    FastMoneyBuy,
    #[strum(to_string = "Fast Money Sell")]
    FastMoneySell,
    #[strum(to_string = "Zero Line Reject Buy")]
    ZeroLineRejectBuy,
    #[strum(to_string = "Zero Line Reject Sell")]
    ZeroLineRejectSell,
    #[strum(to_string = "RSI Trend Break Buy")]
    RsiTrendBreakBuy,
    #[strum(to_string = "RSI Trend Break Sell")]
    RsiTrendBreakSell,
}

/// Where a category is delivered in the response and how it is drawn.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize, strum_macros::Display)]
pub enum SignalFamily {
    /// `signals.buy/goldBuy/sell`: vertical line plus marker group
    Primary,
    /// `signals.cross`: uncapped, drawn at its own value
    Cross,
    /// `divergences.*`: marker group only
    Divergence,
    /// `patterns.*`: marker group only
    Pattern,
}

impl SignalKind {
    /// Categories drawn as labeled vertical lines plus a fixed-offset marker group.
    pub const CAPPED: [SignalKind; 3] = [SignalKind::Buy, SignalKind::GoldBuy, SignalKind::Sell];

    pub const DIVERGENCES: [SignalKind; 6] = [
        SignalKind::BullishDiv,
        SignalKind::BearishDiv,
        SignalKind::HiddenBullishDiv,
        SignalKind::HiddenBearishDiv,
        SignalKind::MfBullishDiv,
        SignalKind::MfBearishDiv,
    ];

    pub const PATTERNS: [SignalKind; 6] = [
        SignalKind::FastMoneyBuy,
        SignalKind::FastMoneySell,
        SignalKind::ZeroLineRejectBuy,
        SignalKind::ZeroLineRejectSell,
        SignalKind::RsiTrendBreakBuy,
        SignalKind::RsiTrendBreakSell,
    ];

    pub fn family(&self) -> SignalFamily {
        use SignalKind::*;
        match self {
            Buy | GoldBuy | Sell => SignalFamily::Primary,
            Cross => SignalFamily::Cross,
            BullishDiv | BearishDiv | HiddenBullishDiv | HiddenBearishDiv | MfBullishDiv
            | MfBearishDiv => SignalFamily::Divergence,
            FastMoneyBuy | FastMoneySell | ZeroLineRejectBuy | ZeroLineRejectSell
            | RsiTrendBreakBuy | RsiTrendBreakSell => SignalFamily::Pattern,
        }
    }

    /// Key of the event list inside its family object.
    pub fn key(&self) -> &'static str {
        use SignalKind::*;
        match self {
            Buy => "buy",
            GoldBuy => "goldBuy",
            Sell => "sell",
            Cross => "cross",
            BullishDiv => "bullish",
            BearishDiv => "bearish",
            HiddenBullishDiv => "hiddenBullish",
            HiddenBearishDiv => "hiddenBearish",
            MfBullishDiv => "mfBullish",
            MfBearishDiv => "mfBearish",
            FastMoneyBuy => "fastMoneyBuy",
            FastMoneySell => "fastMoneySell",
            ZeroLineRejectBuy => "zeroLineRejectBuy",
            ZeroLineRejectSell => "zeroLineRejectSell",
            RsiTrendBreakBuy => "rsiTrendBreakBuy",
            RsiTrendBreakSell => "rsiTrendBreakSell",
        }
    }

    /// Direction the event points to. Crosses carry theirs per event.
    pub fn polarity(&self) -> Option<Polarity> {
        use SignalKind::*;
        match self {
            Buy | GoldBuy | BullishDiv | HiddenBullishDiv | MfBullishDiv | FastMoneyBuy
            | ZeroLineRejectBuy | RsiTrendBreakBuy => Some(Polarity::Bullish),
            Sell | BearishDiv | HiddenBearishDiv | MfBearishDiv | FastMoneySell
            | ZeroLineRejectSell | RsiTrendBreakSell => Some(Polarity::Bearish),
            Cross => None,
        }
    }
}

/// A dated event as delivered. The timestamp stays raw text until the annotation
/// layer parses it, so one bad entry can be skipped on its own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SignalEvent {
    pub kind: SignalKind,
    pub date: String,
}

/// A WT1/WT2 crossover, plotted at its own `value`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CrossEvent {
    pub date: String,
    pub value: f64,
    /// Bearish cross (WT2 above WT1 at the cross)
    pub is_red: bool,
}

/// All discrete events of one fetch.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SignalSet {
    pub buy: Vec<SignalEvent>,
    pub gold_buy: Vec<SignalEvent>,
    pub sell: Vec<SignalEvent>,
    pub cross: Vec<CrossEvent>,
    /// Divergence and pattern lists, keyed by kind. Absent lists have no entry.
    pub secondary: BTreeMap<SignalKind, Vec<SignalEvent>>,
}

impl SignalSet {
    pub fn events(&self, kind: SignalKind) -> &[SignalEvent] {
        match kind {
            SignalKind::Buy => &self.buy,
            SignalKind::GoldBuy => &self.gold_buy,
            SignalKind::Sell => &self.sell,
            SignalKind::Cross => &[],
            other => self.secondary.get(&other).map_or(&[], Vec::as_slice),
        }
    }
}
