//! Toolbar modes for arrange operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for parsing toolbar mode strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    /// Not one of left, center, right, top, middle, bottom.
    #[error("Unknown alignment mode: {0}")]
    UnknownAlignMode(String),

    /// Not one of horizontal, vertical.
    #[error("Unknown distribution axis: {0}")]
    UnknownDistributeAxis(String),

    /// Not one of bring-to-front, bring-forward, send-backward, send-to-back.
    #[error("Unknown stacking order: {0}")]
    UnknownStackOrder(String),
}

/// Edge or center to align to.
///
/// `Left`, `Center` and `Right` write `x`; `Top`, `Middle` and `Bottom` write `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignMode {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl AlignMode {
    /// Returns true if this mode moves elements along the x axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, AlignMode::Left | AlignMode::Center | AlignMode::Right)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlignMode::Left => "left",
            AlignMode::Center => "center",
            AlignMode::Right => "right",
            AlignMode::Top => "top",
            AlignMode::Middle => "middle",
            AlignMode::Bottom => "bottom",
        }
    }
}

impl FromStr for AlignMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(AlignMode::Left),
            "center" => Ok(AlignMode::Center),
            "right" => Ok(AlignMode::Right),
            "top" => Ok(AlignMode::Top),
            "middle" => Ok(AlignMode::Middle),
            "bottom" => Ok(AlignMode::Bottom),
            other => Err(ModeError::UnknownAlignMode(other.to_string())),
        }
    }
}

impl fmt::Display for AlignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis along which [`distribute`](super::distribute) spaces elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributeAxis {
    Horizontal,
    Vertical,
}

impl DistributeAxis {
    pub fn as_str(self) -> &'static str {
        match self {
            DistributeAxis::Horizontal => "horizontal",
            DistributeAxis::Vertical => "vertical",
        }
    }
}

impl FromStr for DistributeAxis {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(DistributeAxis::Horizontal),
            "vertical" => Ok(DistributeAxis::Vertical),
            other => Err(ModeError::UnknownDistributeAxis(other.to_string())),
        }
    }
}

impl fmt::Display for DistributeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stacking-order command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackOrder {
    BringToFront,
    BringForward,
    SendBackward,
    SendToBack,
}

impl StackOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            StackOrder::BringToFront => "bring-to-front",
            StackOrder::BringForward => "bring-forward",
            StackOrder::SendBackward => "send-backward",
            StackOrder::SendToBack => "send-to-back",
        }
    }
}

impl FromStr for StackOrder {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bring-to-front" => Ok(StackOrder::BringToFront),
            "bring-forward" => Ok(StackOrder::BringForward),
            "send-backward" => Ok(StackOrder::SendBackward),
            "send-to-back" => Ok(StackOrder::SendToBack),
            other => Err(ModeError::UnknownStackOrder(other.to_string())),
        }
    }
}

impl fmt::Display for StackOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_mode_round_trip_strings() {
        for mode in [
            AlignMode::Left,
            AlignMode::Center,
            AlignMode::Right,
            AlignMode::Top,
            AlignMode::Middle,
            AlignMode::Bottom,
        ] {
            assert_eq!(mode.as_str().parse::<AlignMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_align_mode_axis() {
        assert!(AlignMode::Center.is_horizontal());
        assert!(!AlignMode::Middle.is_horizontal());
    }

    #[test]
    fn test_unknown_align_mode() {
        let err = "centre".parse::<AlignMode>().unwrap_err();
        assert_eq!(err, ModeError::UnknownAlignMode("centre".to_string()));
        assert_eq!(err.to_string(), "Unknown alignment mode: centre");
    }

    #[test]
    fn test_distribute_axis_parse() {
        assert_eq!("vertical".parse::<DistributeAxis>(), Ok(DistributeAxis::Vertical));
        assert!("diagonal".parse::<DistributeAxis>().is_err());
    }

    #[test]
    fn test_stack_order_parse() {
        assert_eq!("send-to-back".parse::<StackOrder>(), Ok(StackOrder::SendToBack));
        assert_eq!(
            "to-front".parse::<StackOrder>(),
            Err(ModeError::UnknownStackOrder("to-front".to_string()))
        );
        assert_eq!(StackOrder::BringForward.to_string(), "bring-forward");
    }
}
