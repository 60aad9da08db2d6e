use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application-level record linked one-to-one with an account.
///
/// Profiles are created by a server-side trigger after sign-up, never by
/// this client, which is why they may lag behind the account itself.
/// Topic and reply author references point at [`Profile::id`], not at the
/// raw account id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Read-only reference data for grouping topics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display color as a hex string, e.g. `#f97316`
    pub color: String,
}

/// Narrow author projection embedded in topic listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicAuthor {
    pub username: String,
}

/// Narrow category projection embedded in topic listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryTag {
    pub name: String,
    pub color: String,
}

/// Listing projection of a topic with its embedded author and category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub category_id: String,
    pub is_pinned: bool,
    pub view_count: i64,
    pub like_count: i64,
    pub reply_count: i64,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "profiles")]
    pub author: Option<TopicAuthor>,
    #[serde(rename = "categories")]
    pub category: Option<CategoryTag>,
}

/// Full topic row with complete author and category records embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicDetail {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub category_id: String,
    pub is_pinned: bool,
    pub view_count: i64,
    pub like_count: i64,
    pub reply_count: i64,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "profiles")]
    pub author: Option<Profile>,
    #[serde(rename = "categories")]
    pub category: Option<Category>,
}

/// A reply within a topic, ordered oldest-first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub content: String,
    pub author_id: String,
    pub topic_id: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "profiles")]
    pub author: Option<Profile>,
}

/// Insert payload for a new topic.
///
/// `author_id` must be the resolved profile's id; the remote schema
/// enforces a foreign key from topics to profiles, not to accounts.
#[derive(Clone, Debug, Serialize)]
pub struct NewTopic {
    pub title: String,
    pub content: String,
    pub category_id: String,
    pub author_id: String,
}

/// Insert payload for a new reply. Same author invariant as [`NewTopic`].
#[derive(Clone, Debug, Serialize)]
pub struct NewReply {
    pub content: String,
    pub topic_id: String,
    pub author_id: String,
}
