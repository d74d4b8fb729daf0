use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{category_matches, contains_ignore_case};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    pub category: String,
    pub date: NaiveDate,
    pub author: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgent: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub date: NaiveDate,
    /// Falls back to the acting admin when absent.
    pub author: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_published")]
    pub published: bool,
    pub urgent: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub author: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub urgent: Option<Option<bool>>,
}

impl Announcement {
    pub fn apply(&mut self, update: UpdateAnnouncementRequest) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(excerpt) = update.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(author) = update.author {
            self.author = author;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(published) = update.published {
            self.published = published;
        }
        if let Some(urgent) = update.urgent {
            self.urgent = urgent;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnouncementFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

impl AnnouncementFilter {
    pub fn matches(&self, announcement: &Announcement) -> bool {
        if !category_matches(self.category.as_deref(), &announcement.category) {
            return false;
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let hit = contains_ignore_case(&announcement.title, search)
                || contains_ignore_case(&announcement.excerpt, search)
                || contains_ignore_case(&announcement.content, search);
            if !hit {
                return false;
            }
        }
        if self.featured.is_some_and(|f| f != announcement.featured) {
            return false;
        }
        if self.published.is_some_and(|p| p != announcement.published) {
            return false;
        }
        true
    }
}

fn default_category() -> String {
    "Academic".to_string()
}

fn default_published() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Announcement {
        Announcement {
            id: 1,
            title: "Fall Sports Registration".to_string(),
            content: "Soccer, volleyball and cross country.".to_string(),
            excerpt: "Registration is now open".to_string(),
            category: "Sports".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(),
            author: "Coach".to_string(),
            featured: false,
            published: true,
            urgent: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn search_is_case_insensitive_across_body_fields() {
        let a = sample();
        let by_title = AnnouncementFilter { search: Some("SPORTS".into()), ..Default::default() };
        let by_content = AnnouncementFilter { search: Some("volleyball".into()), ..Default::default() };
        let miss = AnnouncementFilter { search: Some("chess".into()), ..Default::default() };
        assert!(by_title.matches(&a));
        assert!(by_content.matches(&a));
        assert!(!miss.matches(&a));
    }

    #[test]
    fn all_category_disables_category_filter() {
        let a = sample();
        let all = AnnouncementFilter { category: Some("All".into()), ..Default::default() };
        let other = AnnouncementFilter { category: Some("Academic".into()), ..Default::default() };
        assert!(all.matches(&a));
        assert!(!other.matches(&a));
    }

    #[test]
    fn featured_flag_filters() {
        let a = sample();
        let featured = AnnouncementFilter { featured: Some(true), ..Default::default() };
        assert!(!featured.matches(&a));
    }

    #[test]
    fn apply_only_touches_given_fields() {
        let mut a = sample();
        a.apply(UpdateAnnouncementRequest {
            published: Some(false),
            ..Default::default()
        });
        assert!(!a.published);
        assert_eq!(a.title, "Fall Sports Registration");
    }

    #[test]
    fn null_urgent_clears_flag() {
        let mut a = sample();
        a.apply(serde_json::from_str(r#"{"urgent":true}"#).unwrap());
        assert_eq!(a.urgent, Some(true));
        a.apply(serde_json::from_str(r#"{"urgent":null}"#).unwrap());
        assert_eq!(a.urgent, None);
    }
}
