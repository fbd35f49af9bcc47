use crate::OutputFormat;
use crate::error::StatusError;
use crate::status::{Classification, StatusKind};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Style tag attached to a rendered status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusStyle {
    #[serde(rename = "status-flying")]
    Flying,
    #[serde(rename = "status-abroad")]
    Abroad,
    #[serde(rename = "status-home")]
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Plane,
    Beach,
    Home,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Plane => "✈",
            Icon::Beach => "🏖",
            Icon::Home => "🏠",
        }
    }
}

/// Everything needed to display one classified status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPanel {
    pub style: StatusStyle,
    pub icon: Icon,
    pub description: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrives_at: Option<DateTime<Utc>>,
    pub classification: Classification,
}

impl From<Classification> for StatusPanel {
    fn from(classification: Classification) -> Self {
        let (style, icon) = match classification.kind() {
            StatusKind::Flying => (StatusStyle::Flying, Icon::Plane),
            StatusKind::Abroad => (StatusStyle::Abroad, Icon::Beach),
            StatusKind::Home => (StatusStyle::Home, Icon::Home),
        };
        let arrives_at = match &classification {
            Classification::Flying { arrives_at, .. } => *arrives_at,
            _ => None,
        };

        Self {
            style,
            icon,
            description: classification.description(),
            details: classification.detail_text(),
            arrives_at,
            classification,
        }
    }
}

/// What the terminal should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PresentationState {
    #[default]
    Checking,
    Status(StatusPanel),
    Error {
        message: String,
    },
}

impl PresentationState {
    pub fn error(err: &StatusError) -> Self {
        PresentationState::Error {
            message: err.to_string(),
        }
    }
}

pub fn render(state: &PresentationState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(state)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(state).context("Failed to serialize status")
        }
    }
}

pub fn render_text(state: &PresentationState) -> String {
    match state {
        PresentationState::Checking => "Checking...".to_string(),
        PresentationState::Status(panel) => {
            let mut out = format!(
                "{} {}\n  {}",
                panel.icon.glyph(),
                panel.description,
                panel.details
            );
            if let Some(arrival) = panel.arrives_at {
                out.push_str(&format!("\n  Lands at {}", arrival.format("%Y-%m-%d %H:%M:%S UTC")));
            }
            out
        }
        PresentationState::Error { message } => format!("✗ {}", message),
    }
}
