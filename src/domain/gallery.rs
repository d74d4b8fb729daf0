use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category_matches;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
}

/// A gallery entry.
///
/// `image_url` is the one authoritative image reference. Records written
/// with the older `image` / `thumbnail` aliases are folded into it on read,
/// see [`StoredGalleryItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredGalleryItem")]
pub struct GalleryItem {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Only set when it differs from `image_url` (e.g. a video poster frame).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub category: String,
    pub year: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub featured: bool,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// On-disk shape, tolerant of the redundant image fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredGalleryItem {
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    image_url: Option<String>,
    image: Option<String>,
    thumbnail: Option<String>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    year: String,
    #[serde(rename = "type")]
    media_type: MediaType,
    #[serde(default)]
    featured: bool,
    date: NaiveDate,
    photos: Option<u32>,
    duration: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<StoredGalleryItem> for GalleryItem {
    fn from(stored: StoredGalleryItem) -> Self {
        let image_url = stored
            .image_url
            .clone()
            .or_else(|| stored.image.clone())
            .or_else(|| stored.thumbnail.clone())
            .unwrap_or_default();
        let thumbnail = stored.thumbnail.filter(|t| *t != image_url);

        GalleryItem {
            id: stored.id,
            title: stored.title,
            description: stored.description,
            image_url,
            thumbnail,
            category: stored.category,
            year: stored.year,
            media_type: stored.media_type,
            featured: stored.featured,
            date: stored.date,
            photos: stored.photos,
            duration: stored.duration,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub year: String,
    #[serde(rename = "type", default = "default_media_type")]
    pub media_type: MediaType,
    #[serde(default)]
    pub featured: bool,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGalleryItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub thumbnail: Option<Option<String>>,
    pub category: Option<String>,
    pub year: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    pub featured: Option<bool>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub photos: Option<Option<u32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub duration: Option<Option<String>>,
}

impl GalleryItem {
    pub fn apply(&mut self, update: UpdateGalleryItemRequest) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = image_url;
        }
        if let Some(thumbnail) = update.thumbnail {
            self.thumbnail = thumbnail;
        }
        if let Some(category) = update.category {
            self.category = normalize_category(&category);
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(media_type) = update.media_type {
            if media_type != self.media_type {
                self.photos = match media_type {
                    MediaType::Photo => Some(1),
                    MediaType::Video => None,
                };
            }
            self.media_type = media_type;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(photos) = update.photos {
            self.photos = photos;
        }
        if let Some(duration) = update.duration {
            self.duration = duration;
        }

        // Same rule as on read: a thumbnail equal to the image is redundant.
        if self.thumbnail.as_deref() == Some(self.image_url.as_str()) {
            self.thumbnail = None;
        }
    }
}

/// Gallery categories are stored lowercase, whitespace runs replaced by `-`.
pub fn normalize_category(category: &str) -> String {
    category
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryFilter {
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    pub year: Option<String>,
    pub featured: Option<bool>,
}

impl GalleryFilter {
    pub fn matches(&self, item: &GalleryItem) -> bool {
        let category = self.category.as_deref().map(normalize_category);
        let category = match category.as_deref() {
            Some("all") => None,
            other => other,
        };
        if !category_matches(category, &item.category) {
            return false;
        }
        if self.media_type.is_some_and(|t| t != item.media_type) {
            return false;
        }
        if let Some(year) = self.year.as_deref().filter(|y| !y.is_empty()) {
            if year != item.year {
                return false;
            }
        }
        if self.featured.is_some_and(|f| f != item.featured) {
            return false;
        }
        true
    }
}

fn default_media_type() -> MediaType {
    MediaType::Photo
}
