//! Next-event lookup via the Google Calendar API.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use serde::Deserialize;
use tracing::{debug, instrument};

use rfv_settings::GoogleSettings;

use crate::check_status;
use crate::errors::{GoogleError, Result};

/// Message used whenever the API key or calendar id is unavailable.
pub const MISSING_CONFIG_MESSAGE: &str = "Missing API Key or Calendar ID";

/// Title used for events without a summary.
pub const DEFAULT_EVENT_TITLE: &str = "Next Session";

/// When an event starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventStart {
    /// A timed event, in the calendar's own offset.
    DateTime(DateTime<FixedOffset>),
    /// An all-day event.
    Date(NaiveDate),
}

impl EventStart {
    /// Human-readable start date, e.g. `Nov 28, 2025`.
    ///
    /// Timed events use the date in their own offset, not UTC.
    pub fn display_date(&self) -> String {
        match self {
            Self::DateTime(dt) => dt.format("%b %d, %Y").to_string(),
            Self::Date(d) => d.format("%b %d, %Y").to_string(),
        }
    }

    fn parse(date_time: Option<&str>, date: Option<&str>) -> Result<Self> {
        if let Some(raw) = date_time {
            return DateTime::parse_from_rfc3339(raw)
                .map(Self::DateTime)
                .map_err(|e| GoogleError::InvalidResponse(format!("start.dateTime {raw:?}: {e}")));
        }
        if let Some(raw) = date {
            return NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(Self::Date)
                .map_err(|e| GoogleError::InvalidResponse(format!("start.date {raw:?}: {e}")));
        }
        Err(GoogleError::InvalidResponse("event has no start".into()))
    }
}

/// The soonest upcoming event of a calendar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Event summary, or [`DEFAULT_EVENT_TITLE`].
    pub title: String,
    /// Start time or date.
    pub start: EventStart,
    /// Link to the event in Google Calendar.
    pub link: Option<String>,
}

/// Reads upcoming events from a calendar.
#[async_trait]
pub trait CalendarReader: Send + Sync {
    /// The next event starting after now, if any.
    async fn next_event(&self, calendar_id: &str) -> Result<Option<CalendarEvent>>;
}

#[derive(Deserialize)]
struct EventList {
    #[serde(default)]
    items: Vec<RawEvent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvent {
    summary: Option<String>,
    html_link: Option<String>,
    #[serde(default)]
    start: RawStart,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStart {
    date_time: Option<String>,
    date: Option<String>,
}

/// [`CalendarReader`] using an API key against the Calendar v3 REST API.
#[derive(Debug)]
pub struct GoogleCalendarReader {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GoogleCalendarReader {
    /// Build a reader from settings. A missing key is reported per request.
    pub fn new(client: reqwest::Client, settings: &GoogleSettings) -> Self {
        Self::with_api_key(client, settings.api_key.clone(), &settings.calendar_base_url)
    }

    /// Build a reader against an explicit endpoint.
    pub fn with_api_key(client: reqwest::Client, api_key: Option<String>, base_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: base_url.to_string(),
        }
    }

    fn events_url(&self, calendar_id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| GoogleError::MissingConfig(format!("invalid calendar base url: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| GoogleError::MissingConfig("invalid calendar base url".into()))?
            .pop_if_empty()
            .extend(["calendar", "v3", "calendars", calendar_id, "events"]);
        Ok(url)
    }
}

#[async_trait]
impl CalendarReader for GoogleCalendarReader {
    #[instrument(skip(self))]
    async fn next_event(&self, calendar_id: &str) -> Result<Option<CalendarEvent>> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GoogleError::MissingConfig(MISSING_CONFIG_MESSAGE.into()));
        };
        let time_min = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let response = self
            .client
            .get(self.events_url(calendar_id)?)
            .query(&[
                ("key", api_key),
                ("timeMin", time_min.as_str()),
                ("maxResults", "1"),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
            ])
            .send()
            .await?;
        let list: EventList = check_status(response, "list events").await?.json().await?;

        let Some(raw) = list.items.into_iter().next() else {
            debug!("no upcoming events");
            return Ok(None);
        };
        let start = EventStart::parse(raw.start.date_time.as_deref(), raw.start.date.as_deref())?;
        Ok(Some(CalendarEvent {
            title: raw.summary.unwrap_or_else(|| DEFAULT_EVENT_TITLE.to_string()),
            start,
            link: raw.html_link,
        }))
    }
}
