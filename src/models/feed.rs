//! Dashboard feed, calendar and chat models.

use serde::{Deserialize, Serialize};

/// An upcoming session on the dashboard feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedUpcoming {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub pic: String,
}

/// A recently updated notulensi on the dashboard feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedRecent {
    pub id: i64,
    pub session_name: String,
    pub session_date: String,
    pub summary: String,
    pub updated_at: String,
}

/// Kind of a calendar entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalendarEventType {
    RohisSession,
    IslamicHoliday,
}

/// Calendar-widget payload carried alongside each event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventProps {
    #[serde(rename = "type")]
    pub event_type: CalendarEventType,
    #[serde(default)]
    pub session_id: Option<i64>,
    /// Hijri date label for Islamic holidays.
    #[serde(default)]
    pub hijri: Option<String>,
}

/// One calendar event. Field names follow the calendar widget's contract,
/// hence the camelCase renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: String,
    #[serde(rename = "allDay", default)]
    pub all_day: Option<bool>,
    #[serde(rename = "backgroundColor", default)]
    pub background_color: Option<String>,
    #[serde(rename = "borderColor", default)]
    pub border_color: Option<String>,
    #[serde(rename = "textColor", default)]
    pub text_color: Option<String>,
    #[serde(rename = "extendedProps")]
    pub extended_props: CalendarEventProps,
}

/// Assistant reply from the chat endpoint. `action = "navigate"` carries a
/// client route in `route`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub action: String,
    pub message: String,
    #[serde(default)]
    pub route: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_event_widget_field_names() {
        let event: CalendarEvent = serde_json::from_value(serde_json::json!({
            "title": "Isra Mi'raj",
            "start": "2025-01-27",
            "allDay": true,
            "backgroundColor": "#16a34a",
            "extendedProps": {"type": "islamic_holiday", "hijri": "27 Rajab 1446"}
        }))
        .unwrap();

        assert_eq!(event.all_day, Some(true));
        assert_eq!(
            event.extended_props.event_type,
            CalendarEventType::IslamicHoliday
        );
        assert_eq!(event.extended_props.hijri.as_deref(), Some("27 Rajab 1446"));
    }
}
