//! Render snapshot for the anniversary screen.
//!
//! # Responsibility
//! - Turn engine output into the fixed German strings the screen shows.
//! - Format dates and captions for the developer console.
//!
//! # Invariants
//! - The singular "Tag" is used whenever `days == 1`, in both directions.

use crate::engine::delta::DeltaResult;
use crate::model::anniversary::AnniversaryTimestamp;
use crate::time::calendar::Calendar;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const TITLE: &str = "Anniversary";
pub const HEADLINE: &str = "Ihr seid seit:";
pub const EDIT_ACTION_LABEL: &str = "Jahrestag bearbeiten";
pub const DEVELOPER_CONSOLE_LABEL: &str = "🛠 Entwicklerkonsole öffnen";
pub const DEVELOPER_CONSOLE_TITLE: &str = "🛠 Entwicklerkonsole";
pub const RESET_ACTION_LABEL: &str = "Jahrestag zurücksetzen";

const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnniversaryOverview {
    pub title: String,
    pub headline: String,
    pub days: u64,
    pub is_in_future: bool,
    /// Label printed under the day count.
    pub unit_label: String,
    pub edit_action_label: String,
    /// Whether the hidden developer console entry should be shown.
    pub developer_console_unlocked: bool,
    pub developer_console_title: String,
    /// `Aktueller Jahrestag: …` line shown inside the console.
    pub developer_console_caption: String,
    pub reset_action_label: String,
    /// Anniversary instant as stored.
    pub anniversary: AnniversaryTimestamp,
    /// Anniversary in long German date style, e.g. `15. März 2025`.
    pub anniversary_long_date: String,
}

impl AnniversaryOverview {
    pub fn compose(
        anniversary: AnniversaryTimestamp,
        delta: DeltaResult,
        developer_console_unlocked: bool,
        calendar: &impl Calendar,
    ) -> Self {
        let long_date = format_long_date(calendar.local_date(anniversary.instant()));
        Self {
            title: TITLE.to_string(),
            headline: HEADLINE.to_string(),
            days: delta.days,
            is_in_future: delta.is_in_future,
            unit_label: unit_label(delta).to_string(),
            edit_action_label: EDIT_ACTION_LABEL.to_string(),
            developer_console_unlocked,
            developer_console_title: DEVELOPER_CONSOLE_TITLE.to_string(),
            developer_console_caption: console_caption(&long_date),
            reset_action_label: RESET_ACTION_LABEL.to_string(),
            anniversary,
            anniversary_long_date: long_date,
        }
    }
}

/// Direction- and count-dependent label for the day counter.
pub fn unit_label(delta: DeltaResult) -> &'static str {
    match (delta.is_in_future, delta.days == 1) {
        (true, true) => "Tag bis zu diesem Datum",
        (true, false) => "Tage bis zu diesem Datum",
        (false, true) => "Tag ein Paar",
        (false, false) => "Tagen ein Paar",
    }
}

/// Caption naming the current anniversary inside the developer console.
pub fn console_caption(long_date: &str) -> String {
    format!("Aktueller Jahrestag: {long_date}")
}

/// Long German date style: `15. März 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    let month = MONTH_NAMES[date.month0() as usize];
    format!("{}. {} {}", date.day(), month, date.year())
}
