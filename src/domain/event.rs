use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{category_matches, contains_ignore_case};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Display time as entered, e.g. "6:00 PM".
    pub time: String,
    pub location: String,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub registration_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub current_attendees: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    pub image: Option<String>,
    #[serde(default)]
    pub registration_required: bool,
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub current_attendees: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image: Option<Option<String>>,
    pub registration_required: Option<bool>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub max_attendees: Option<Option<u32>>,
    pub current_attendees: Option<u32>,
}

impl Event {
    pub fn apply(&mut self, update: UpdateEventRequest) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(time) = update.time {
            self.time = time;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(required) = update.registration_required {
            self.registration_required = required;
        }
        if let Some(max) = update.max_attendees {
            self.max_attendees = max;
        }
        if let Some(current) = update.current_attendees {
            self.current_attendees = current;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub upcoming: Option<bool>,
}

impl EventFilter {
    /// `today` anchors the `upcoming` flag; events on `today` count as upcoming.
    pub fn matches(&self, event: &Event, today: NaiveDate) -> bool {
        if !category_matches(self.category.as_deref(), &event.category) {
            return false;
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let hit = contains_ignore_case(&event.title, search)
                || contains_ignore_case(&event.description, search)
                || contains_ignore_case(&event.location, search);
            if !hit {
                return false;
            }
        }
        if self.featured.is_some_and(|f| f != event.featured) {
            return false;
        }
        if self.upcoming == Some(true) && event.date < today {
            return false;
        }
        true
    }
}

fn default_category() -> String {
    "Academic".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_on(date: NaiveDate) -> Event {
        Event {
            id: 1,
            title: "Annual Science Fair".to_string(),
            description: "Students showcase research".to_string(),
            date,
            time: "9:00 AM".to_string(),
            location: "Gymnasium".to_string(),
            category: "Academic".to_string(),
            featured: true,
            image: None,
            registration_required: true,
            max_attendees: Some(200),
            current_attendees: 45,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn upcoming_includes_today_and_excludes_past() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 20).unwrap();
        let filter = EventFilter { upcoming: Some(true), ..Default::default() };
        assert!(filter.matches(&event_on(today), today));
        assert!(!filter.matches(&event_on(today.pred_opt().unwrap()), today));
    }

    #[test]
    fn search_covers_location() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let filter = EventFilter { search: Some("gym".into()), ..Default::default() };
        assert!(filter.matches(&event_on(today), today));
    }

    #[test]
    fn create_request_defaults_registration_fields() {
        let req: CreateEventRequest =
            serde_json::from_str(r#"{"title":"Open House","date":"2024-11-02"}"#).unwrap();
        assert!(!req.registration_required);
        assert_eq!(req.current_attendees, 0);
        assert_eq!(req.max_attendees, None);
    }

    #[test]
    fn explicit_null_clears_capacity_but_missing_key_keeps_it() {
        let mut event = event_on(NaiveDate::from_ymd_opt(2024, 10, 20).unwrap());

        let untouched: UpdateEventRequest = serde_json::from_str(r#"{"title":"Fair"}"#).unwrap();
        event.apply(untouched);
        assert_eq!(event.max_attendees, Some(200));

        let cleared: UpdateEventRequest =
            serde_json::from_str(r#"{"maxAttendees":null,"image":null}"#).unwrap();
        event.apply(cleared);
        assert_eq!(event.max_attendees, None);
        assert_eq!(event.image, None);
        assert_eq!(event.title, "Fair");
    }
}
