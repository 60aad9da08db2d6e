//! Typed operations over the data API's forum tables.

use crate::client::api::query::{Direction, SelectQuery};

/// Filter inputs for the forum listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TopicFilter {
    /// Restrict the listing to one category.
    pub category_id: Option<String>,
    /// Substring searched across topic titles and bodies.
    pub search: String,
}

/// Listing projection: counters plus the author username and category tag.
const TOPIC_LIST_COLUMNS: &str = "id,title,content,author_id,category_id,is_pinned,\
view_count,like_count,reply_count,created_at,profiles(username),categories(name,color)";

/// Topic listing query: pinned topics first, newest first within each group.
pub fn topics_query(filter: &TopicFilter) -> SelectQuery {
    let mut query = SelectQuery::new("topics")
        .columns(TOPIC_LIST_COLUMNS)
        .order("is_pinned", Direction::Descending)
        .order("created_at", Direction::Descending);
    if let Some(category_id) = &filter.category_id {
        query = query.eq("category_id", category_id);
    }
    let term = filter.search.trim();
    if !term.is_empty() {
        query = query.search_any(&["title", "content"], term);
    }
    query
}

/// Reference-data query for the category sidebar, ordered by name.
pub fn categories_query() -> SelectQuery {
    SelectQuery::new("categories").order("name", Direction::Ascending)
}

/// Single-topic query with the full author and category rows embedded.
pub fn topic_query(topic_id: &str) -> SelectQuery {
    SelectQuery::new("topics")
        .columns("*,profiles(*),categories(*)")
        .eq("id", topic_id)
        .single()
}

/// Replies for one topic, oldest first.
pub fn replies_query(topic_id: &str) -> SelectQuery {
    SelectQuery::new("replies")
        .columns("*,profiles(*)")
        .eq("topic_id", topic_id)
        .order("created_at", Direction::Ascending)
}

/// Profile lookup by the owning account's id.
pub fn profile_query(user_id: &str) -> SelectQuery {
    SelectQuery::new("profiles").eq("user_id", user_id).single()
}

#[cfg(feature = "web")]
mod requests {
    use serde::Serialize;

    use super::*;
    use crate::client::api::query::rpc_path;
    use crate::client::api::{http, query::insert_path, ApiError};
    use crate::model::forum::{
        Category, NewReply, NewTopic, Profile, Reply, TopicDetail, TopicSummary,
    };

    #[derive(Serialize)]
    struct IncrementViewCount<'a> {
        topic_id_in: &'a str,
    }

    pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
        http::get_rows(&categories_query(), None).await
    }

    pub async fn fetch_topics(filter: &TopicFilter) -> Result<Vec<TopicSummary>, ApiError> {
        http::get_rows(&topics_query(filter), None).await
    }

    pub async fn fetch_topic(topic_id: &str) -> Result<Option<TopicDetail>, ApiError> {
        http::get_single(&topic_query(topic_id), None).await
    }

    pub async fn fetch_replies(topic_id: &str) -> Result<Vec<Reply>, ApiError> {
        http::get_rows(&replies_query(topic_id), None).await
    }

    /// Fetch the profile provisioned for an account, `None` while the
    /// sign-up trigger has not created it yet.
    pub async fn fetch_profile(user_id: &str) -> Result<Option<Profile>, ApiError> {
        http::get_single(&profile_query(user_id), None).await
    }

    /// Insert a topic on behalf of the authenticated author.
    pub async fn create_topic(access_token: &str, topic: &NewTopic) -> Result<(), ApiError> {
        http::post_json(&insert_path("topics"), topic, Some(access_token)).await
    }

    /// Insert a reply on behalf of the authenticated author.
    pub async fn create_reply(access_token: &str, reply: &NewReply) -> Result<(), ApiError> {
        http::post_json(&insert_path("replies"), reply, Some(access_token)).await
    }

    /// Bump a topic's view counter server-side.
    pub async fn increment_view_count(topic_id: &str) -> Result<(), ApiError> {
        let params = IncrementViewCount {
            topic_id_in: topic_id,
        };
        http::post_json(&rpc_path("increment_view_count"), &params, None).await
    }
}

#[cfg(feature = "web")]
pub use requests::{
    create_reply, create_topic, fetch_categories, fetch_profile, fetch_replies, fetch_topic,
    fetch_topics, increment_view_count,
};
