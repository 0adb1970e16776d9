//! Outcomes of dispatching a message.
//!
//! Every state change the engine makes is reported as one of these.
//! The front end renders from snapshots; events are for logs, IPC,
//! and tests.

use crate::{
    theme::Theme,
    types::{Amount, TickCount, TimerId},
};
use serde::{Deserialize, Serialize};

/// Variants are appended, never reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    InputChanged {
        digits:  String,
        display: String,
    },
    /// Input arrived while running and was discarded.
    InputIgnored,
    Started {
        amount:     Amount,
        per_second: f64,
        timer_id:   TimerId,
    },
    /// Start requested with no positive amount.
    StartRejected,
    Paused {
        earnings: f64,
        ticks:    TickCount,
    },
    Reset,
    Ticked {
        tick:     TickCount,
        earnings: f64,
    },
    ThemeChanged {
        theme: Theme,
    },
}

impl StreamEvent {
    /// Stable name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            StreamEvent::InputChanged { .. } => "input_changed",
            StreamEvent::InputIgnored        => "input_ignored",
            StreamEvent::Started { .. }      => "started",
            StreamEvent::StartRejected       => "start_rejected",
            StreamEvent::Paused { .. }       => "paused",
            StreamEvent::Reset               => "reset",
            StreamEvent::Ticked { .. }       => "ticked",
            StreamEvent::ThemeChanged { .. } => "theme_changed",
        }
    }
}
