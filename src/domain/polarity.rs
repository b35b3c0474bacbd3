use serde::{Deserialize, Serialize};

/// Direction of a comparison-colored segment or a cross event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum_macros::Display,
)]
pub enum Polarity {
    #[default]
    Bullish,
    Bearish,
}

/// Sign of a money-flow sample.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum_macros::Display,
)]
pub enum FlowPolarity {
    #[default]
    Positive,
    Negative,
}

impl FlowPolarity {
    // Zero counts as positive
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            FlowPolarity::Negative
        } else {
            FlowPolarity::Positive
        }
    }
}
