//! Connection severity derived from endpoint status.

use serde::{Deserialize, Serialize};

use crate::model::{Component, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Normal,
    Warning,
    Error,
}

/// Directional marker drawn at the `to` end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerGlyph {
    Arrow,
    WarningArrow,
    ErrorArrow,
}

/// Stroke emphasis for a rendered connection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub stroke_width: f64,
    pub opacity: f64,
    pub marker: MarkerGlyph,
}

impl Severity {
    pub fn line_style(self) -> LineStyle {
        match self {
            Severity::Normal => LineStyle {
                stroke_width: 2.0,
                opacity: 0.8,
                marker: MarkerGlyph::Arrow,
            },
            Severity::Warning => LineStyle {
                stroke_width: 2.5,
                opacity: 0.9,
                marker: MarkerGlyph::WarningArrow,
            },
            Severity::Error => LineStyle {
                stroke_width: 3.0,
                opacity: 1.0,
                marker: MarkerGlyph::ErrorArrow,
            },
        }
    }
}

/// Severity of a wire from the statuses at its two ends.
///
/// A failure on either end wins over an alarm on the other.
pub fn classify_status(from: Status, to: Status) -> Severity {
    if from == Status::Falha || to == Status::Falha {
        Severity::Error
    } else if from == Status::Alarme || to == Status::Alarme {
        Severity::Warning
    } else {
        Severity::Normal
    }
}

pub fn classify(from: &Component, to: &Component) -> Severity {
    classify_status(from.status, to.status)
}
