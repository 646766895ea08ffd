use serde::Serialize;

use crate::model::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Normal,
    Low,
    High,
    CriticalLow,
    CriticalHigh,
    Abnormal,
    Unknown,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Low => "low",
            Status::High => "high",
            Status::CriticalLow => "critical_low",
            Status::CriticalHigh => "critical_high",
            Status::Abnormal => "abnormal",
            Status::Unknown => "unknown",
        }
    }

    pub fn is_abnormal(self) -> bool {
        !matches!(self, Status::Normal | Status::Unknown)
    }

    pub fn is_critical(self) -> bool {
        matches!(self, Status::CriticalLow | Status::CriticalHigh)
    }

    /// Critical tiers share the direction of their plain counterpart.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Status::Low | Status::CriticalLow => Some(Direction::Low),
            Status::High | Status::CriticalHigh => Some(Direction::High),
            Status::Abnormal => Some(Direction::Abnormal),
            Status::Normal | Status::Unknown => None,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Status::Normal => Color::Green,
            Status::Low | Status::High | Status::Abnormal => Color::Orange,
            Status::CriticalLow | Status::CriticalHigh => Color::Red,
            Status::Unknown => Color::Gray,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Low,
    High,
    Abnormal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Green,
    Orange,
    Red,
    Gray,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub value: Value,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_high: Option<f64>,
    pub status: Status,
    pub message: String,
    pub color: Color,
}
