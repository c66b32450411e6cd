use serde::Deserialize;

use crate::domain::faq::Faq;
use crate::listing::notify::Notification;

#[derive(Debug, Default, Deserialize)]
pub struct FaqQuery {
    pub search: Option<String>,
}

/// Data required to render the FAQ page.
pub struct FaqsPageData {
    /// Entries matching the search term.
    pub faqs: Vec<Faq>,
    /// Size of the unfiltered set.
    pub total: usize,
    pub search: String,
    pub notifications: Vec<Notification>,
}
