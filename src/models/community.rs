//! Community Q&A entities and the question listing contract.

use super::lenient::null_as_default;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A community question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Question {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    pub title: String,
    pub content: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_id: i64,
    /// Comma-separated tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// An answer to a community question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Answer {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    pub content: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_id: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub question_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upvotes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAnswer {
    pub content: String,
    pub question_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPoints {
    pub points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedAnswer {
    pub suggested_answer: String,
}

/// Search, tag filter and pagination for the question listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuestionQuery {
    pub search: Option<String>,
    pub filter: Option<String>,
    pub page: Option<u32>,
    #[serde(alias = "pageSize")]
    pub page_size: Option<u32>,
}

impl QuestionQuery {
    /// Encoded query string in `search, filter, page, page_size` order.
    ///
    /// Blank search and filter terms are left out entirely.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        for (key, value) in [("search", &self.search), ("filter", &self.filter)] {
            if let Some(term) = value.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
                pairs.push(format!("{}={}", key, urlencoding::encode(term)));
            }
        }
        if let Some(page) = self.page {
            pairs.push(format!("page={}", page));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(format!("page_size={}", page_size));
        }

        pairs.join("&")
    }
}

/// Listing shapes the backend is known to return.
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionListing {
    Bare(Vec<Question>),
    Paged {
        #[serde(default)]
        data: Vec<Question>,
        #[serde(default, alias = "total_count", rename = "totalCount")]
        total_count: Option<u64>,
    },
}

/// One page of questions plus the total across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "QuestionListing")]
pub struct QuestionPage {
    #[serde(rename = "data")]
    pub questions: Vec<Question>,
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}

impl From<QuestionListing> for QuestionPage {
    fn from(listing: QuestionListing) -> Self {
        match listing {
            QuestionListing::Bare(questions) => Self {
                total_count: questions.len() as u64,
                questions,
            },
            QuestionListing::Paged { data, total_count } => Self {
                total_count: total_count
                    .filter(|count| *count > 0)
                    .unwrap_or(data.len() as u64),
                questions: data,
            },
        }
    }
}

impl QuestionPage {
    /// Number of pages at the given page size, never less than one.
    pub fn total_pages(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 1;
        }
        self.total_count.div_ceil(u64::from(page_size)).max(1)
    }
}
