use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::{
    Activity, ActivityAction, ActivityKind, Announcement, Event, GalleryItem, MediaType,
};

use super::data_store::SiteState;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).single().unwrap_or_default()
}

/// Fills each empty collection with sample content and moves its id counter
/// past the seeded ids. Returns whether anything was added.
pub(super) fn seed_empty_collections(state: &mut SiteState) -> bool {
    let mut seeded = false;

    if state.announcements.is_empty() {
        state.announcements = sample_announcements();
        state.next_id.announcements = 4;
        seeded = true;
    }

    if state.events.is_empty() {
        state.events = sample_events();
        state.next_id.events = 3;
        seeded = true;
    }

    if state.gallery.is_empty() {
        state.gallery = sample_gallery();
        state.next_id.gallery = 3;
        seeded = true;
    }

    if state.activities.is_empty() {
        state.activities = sample_activities();
        state.next_id.activities = 3;
        seeded = true;
    }

    seeded
}

fn sample_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "Welcome Back to School 2024-2025".to_string(),
            excerpt: "We're excited to welcome all students back for another amazing year of learning and growth.".to_string(),
            content: "Dear Nowzer families, we are thrilled to welcome everyone back for the 2024-2025 academic year! \
                      This year promises to be filled with exciting learning opportunities, new programs, and continued \
                      excellence in education. Our dedicated faculty and staff have been working hard over the summer to \
                      prepare engaging curricula and create a safe, nurturing environment for all our students.".to_string(),
            category: "Academic".to_string(),
            date: day(2024, 8, 15),
            author: "Dr. Sarah Johnson".to_string(),
            published: true,
            featured: true,
            urgent: None,
            created_at: at(2024, 8, 15, 10, 30),
            updated_at: at(2024, 8, 15, 10, 30),
        },
        Announcement {
            id: 2,
            title: "New Science Lab Equipment Installed".to_string(),
            excerpt: "State-of-the-art laboratory equipment has been installed to enhance our STEM programs.".to_string(),
            content: "We are proud to announce the installation of cutting-edge science laboratory equipment across all \
                      our science classrooms. This new equipment includes advanced microscopes, digital sensors, and \
                      interactive whiteboards that will provide our students with hands-on learning experiences in \
                      biology, chemistry, and physics.".to_string(),
            category: "Facilities".to_string(),
            date: day(2024, 8, 10),
            author: "Mr. David Chen".to_string(),
            published: true,
            featured: true,
            urgent: None,
            created_at: at(2024, 8, 10, 14, 20),
            updated_at: at(2024, 8, 10, 14, 20),
        },
        Announcement {
            id: 3,
            title: "Fall Sports Registration Now Open".to_string(),
            excerpt: "Registration is now open for all fall sports including soccer, volleyball, and cross country.".to_string(),
            content: "Attention all student athletes! Registration for fall sports is now open. We offer soccer, \
                      volleyball, cross country, and tennis programs for various grade levels. All interested students \
                      must complete the registration form and submit required medical documentation by August 25th.".to_string(),
            category: "Sports".to_string(),
            date: day(2024, 8, 5),
            author: "Coach Michael Rodriguez".to_string(),
            published: true,
            featured: false,
            urgent: None,
            created_at: at(2024, 8, 5, 16, 45),
            updated_at: at(2024, 8, 5, 16, 45),
        },
    ]
}

fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            title: "Back to School Night".to_string(),
            description: "Meet your child's teachers and learn about the curriculum for the upcoming year.".to_string(),
            date: day(2024, 9, 15),
            time: "6:00 PM".to_string(),
            location: "Main Auditorium".to_string(),
            category: "Academic".to_string(),
            featured: true,
            image: Some("/parent-teacher-conference.png".to_string()),
            registration_required: true,
            max_attendees: None,
            current_attendees: 0,
            created_at: at(2024, 8, 15, 10, 30),
            updated_at: at(2024, 8, 15, 10, 30),
        },
        Event {
            id: 2,
            title: "Annual Science Fair".to_string(),
            description: "Students showcase their scientific research and experiments.".to_string(),
            date: day(2024, 10, 20),
            time: "9:00 AM".to_string(),
            location: "Gymnasium".to_string(),
            category: "Academic".to_string(),
            featured: true,
            image: Some("/science-fair-event.png".to_string()),
            registration_required: true,
            max_attendees: Some(200),
            current_attendees: 45,
            created_at: at(2024, 8, 10, 14, 20),
            updated_at: at(2024, 8, 10, 14, 20),
        },
    ]
}

fn sample_gallery() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            id: 1,
            title: "Graduation Ceremony 2024".to_string(),
            description: "Celebrating our graduating class of 2024 with pride and joy.".to_string(),
            image_url: "/graduation-ceremony-2023.png".to_string(),
            thumbnail: None,
            category: "events".to_string(),
            year: "2024".to_string(),
            media_type: MediaType::Photo,
            featured: true,
            date: day(2024, 6, 15),
            photos: Some(1),
            duration: None,
            created_at: at(2024, 6, 15, 10, 0),
            updated_at: at(2024, 6, 15, 10, 0),
        },
        GalleryItem {
            id: 2,
            title: "Science Fair Highlights".to_string(),
            description: "Amazing projects and discoveries from our young scientists.".to_string(),
            image_url: "/science-fair-video.png".to_string(),
            thumbnail: None,
            category: "academic".to_string(),
            year: "2024".to_string(),
            media_type: MediaType::Video,
            featured: true,
            date: day(2024, 5, 20),
            photos: None,
            duration: Some("3:45".to_string()),
            created_at: at(2024, 5, 20, 14, 30),
            updated_at: at(2024, 5, 20, 14, 30),
        },
    ]
}

fn sample_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            kind: ActivityKind::Announcement,
            action: ActivityAction::Created,
            title: "Welcome Back to School 2024-2025".to_string(),
            timestamp: at(2024, 8, 15, 10, 30),
            user: "Dr. Sarah Johnson".to_string(),
        },
        Activity {
            id: 2,
            kind: ActivityKind::Event,
            action: ActivityAction::Created,
            title: "Annual Science Fair".to_string(),
            timestamp: at(2024, 8, 14, 14, 20),
            user: "Mr. David Chen".to_string(),
        },
    ]
}
