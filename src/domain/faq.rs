use serde::{Deserialize, Serialize};

use crate::domain::types::{FaqText, RecordId, null_as_default};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Faq {
    #[serde(rename(deserialize = "_id"))]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
}

impl Faq {
    /// Text fields matched by the FAQ search box.
    pub fn search_fields(&self) -> [&str; 2] {
        [&self.question, &self.answer]
    }
}

/// Body of the add and update FAQ requests.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewFaq {
    pub question: FaqText,
    pub answer: FaqText,
}

impl NewFaq {
    pub fn new(question: FaqText, answer: FaqText) -> Self {
        Self { question, answer }
    }
}
