use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub school_name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub social_media: SocialMedia,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMedia {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub youtube: String,
    pub linkedin: String,
    pub tiktok: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteSettingsRequest {
    pub school_name: Option<String>,
    pub tagline: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub social_media: Option<UpdateSocialMedia>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSocialMedia {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
    pub tiktok: Option<String>,
}

impl SiteSettings {
    /// Merges top-level fields and, one level down, individual `socialMedia` links.
    pub fn merge(&mut self, update: UpdateSiteSettingsRequest) {
        if let Some(school_name) = update.school_name {
            self.school_name = school_name;
        }
        if let Some(tagline) = update.tagline {
            self.tagline = tagline;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(social) = update.social_media {
            self.social_media.merge(social);
        }
    }
}

impl SocialMedia {
    fn merge(&mut self, update: UpdateSocialMedia) {
        let fields = [
            (&mut self.facebook, update.facebook),
            (&mut self.twitter, update.twitter),
            (&mut self.instagram, update.instagram),
            (&mut self.youtube, update.youtube),
            (&mut self.linkedin, update.linkedin),
            (&mut self.tiktok, update.tiktok),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            school_name: "Nowzer".to_string(),
            tagline: "Excellence in Education, Character in Action".to_string(),
            address: "123 Education Lane, Learning City, LC 12345".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "info@nowzer.edu".to_string(),
            social_media: SocialMedia {
                facebook: "https://facebook.com/nowzer".to_string(),
                twitter: "https://twitter.com/nowzer".to_string(),
                instagram: "https://instagram.com/nowzer".to_string(),
                youtube: "https://youtube.com/nowzer".to_string(),
                linkedin: String::new(),
                tiktok: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_media_merges_per_key() {
        let mut settings = SiteSettings::default();
        let update: UpdateSiteSettingsRequest = serde_json::from_str(
            r#"{"socialMedia": {"facebook": "https://facebook.com/nowzer-school"}}"#,
        )
        .unwrap();
        settings.merge(update);

        assert_eq!(settings.social_media.facebook, "https://facebook.com/nowzer-school");
        assert_eq!(settings.social_media.twitter, "https://twitter.com/nowzer");
        assert_eq!(settings.school_name, "Nowzer");
    }
}
