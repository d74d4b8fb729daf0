use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of entries the activity log retains.
pub const ACTIVITY_LOG_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Announcement,
    Event,
    Gallery,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    Created,
    Updated,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub action: ActivityAction,
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub user: String,
}
