pub mod announcement;
pub mod event;
pub mod gallery;
pub mod activity;
pub mod settings;

pub use announcement::*;
pub use event::*;
pub use gallery::*;
pub use activity::*;
pub use settings::*;

/// Case-insensitive substring match used by the list filters.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// `None`, empty and `"All"` mean "no category filter".
pub(crate) fn category_matches(filter: Option<&str>, category: &str) -> bool {
    match filter {
        None | Some("") | Some("All") => true,
        Some(wanted) => wanted == category,
    }
}
