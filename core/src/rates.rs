//! Constant per-period shares of an annual figure. Pure divisions; nothing
//! here is accumulated.

use crate::{
    format::NumberFormat,
    types::{Amount, DAYS_PER_YEAR, HOURS_PER_YEAR, MINUTES_PER_YEAR, SECONDS_PER_YEAR},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedRates {
    pub daily:      f64,
    pub hourly:     f64,
    pub per_minute: f64,
    pub per_second: f64,
}

impl DerivedRates {
    pub fn from_annual(amount: Amount) -> Self {
        let annual = amount as f64;
        Self {
            daily:      annual / DAYS_PER_YEAR,
            hourly:     annual / HOURS_PER_YEAR,
            per_minute: annual / MINUTES_PER_YEAR,
            per_second: annual / SECONDS_PER_YEAR,
        }
    }

    /// Abbreviated, symbol-prefixed strings for the summary cards.
    pub fn display(&self, fmt: &impl NumberFormat) -> RatesDisplay {
        let show = |v: f64| format!("{}{}", fmt.currency_symbol(), fmt.abbreviate(v));
        RatesDisplay {
            daily:      show(self.daily),
            hourly:     show(self.hourly),
            per_minute: show(self.per_minute),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesDisplay {
    pub daily:      String,
    pub hourly:     String,
    pub per_minute: String,
}
