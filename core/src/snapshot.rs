//! Serializable view of a session: everything a front end draws.

use crate::{
    engine::EngineState,
    rates::RatesDisplay,
    theme::Theme,
    types::{SessionId, TickCount},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    pub session_id:    SessionId,
    pub state:         EngineState,
    pub theme:         Theme,
    /// Grouped amount as typed; empty when nothing entered.
    pub input:         String,
    pub input_enabled: bool,
    pub can_start:     bool,
    /// True while ticking; drives the "Live" marker.
    pub live:          bool,
    pub ticks:         TickCount,
    pub earnings:      f64,
    /// Present once started, cleared by reset.
    pub earned_display: Option<String>,
    /// Present whenever the amount is positive.
    pub rates:         Option<RatesDisplay>,
    pub started_at:    Option<DateTime<Utc>>,
}
