//! Shared campaign file.
//!
//! The campaign YAML is owned by the game master and edited by hand, so it
//! is re-read on every lookup instead of being cached at startup. Only the
//! `calendar.calendarId` entry is consumed here:
//!
//! ```yaml
//! calendar:
//!   calendarId: party@group.calendar.google.com
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::CalendarSettings;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CampaignFile {
    calendar: CampaignCalendar,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CampaignCalendar {
    calendar_id: Option<String>,
}

/// Read `calendar.calendarId` from a campaign file.
///
/// A missing file or a file without the entry yields `Ok(None)`.
pub fn read_calendar_id(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        debug!(?path, "campaign file not found");
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    let campaign: CampaignFile = serde_yaml::from_str(&content)?;
    Ok(campaign
        .calendar
        .calendar_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty()))
}

impl CalendarSettings {
    /// Calendar id to query: the campaign file entry, else the configured fallback.
    pub fn resolve_calendar_id(&self) -> Option<String> {
        let path = Path::new(&self.campaign_file);
        let from_campaign = match read_calendar_id(path) {
            Ok(id) => id,
            Err(error) => {
                warn!(?path, %error, "failed to read campaign file, using fallback calendar id");
                None
            }
        };
        from_campaign.or_else(|| {
            self.calendar_id
                .clone()
                .filter(|id| !id.trim().is_empty())
        })
    }
}
