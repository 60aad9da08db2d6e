//! Tests for data-API query construction.

use crate::client::api::forum::{
    categories_query, profile_query, replies_query, topic_query, topics_query, TopicFilter,
};
use crate::client::api::query::{encode_component, insert_path, rpc_path};

/// Expect the listing to sort pinned topics first, newest first within
/// each group.
#[test]
fn orders_topics_pinned_then_newest() {
    let path = topics_query(&TopicFilter::default()).path();

    assert!(path.starts_with("/rest/v1/topics?select="));
    assert!(path.ends_with("&order=is_pinned.desc,created_at.desc"));
}

/// Expect the listing projection to embed the author username and the
/// category tag.
#[test]
fn topic_listing_embeds_author_and_category() {
    let path = topics_query(&TopicFilter::default()).path();

    assert!(path.contains("profiles(username)"));
    assert!(path.contains("categories(name,color)"));
}

/// Expect a selected category to become an equality filter.
#[test]
fn filters_topics_by_category() {
    let filter = TopicFilter {
        category_id: Some("cat-1".to_string()),
        search: String::new(),
    };

    let path = topics_query(&filter).path();

    assert!(path.contains("&category_id=eq.cat-1"));
}

/// Expect search text to match either the title or the content.
#[test]
fn searches_across_title_and_content() {
    let filter = TopicFilter {
        category_id: None,
        search: "servo".to_string(),
    };

    let path = topics_query(&filter).path();

    assert!(path.contains("&or=(title.ilike.*servo*,content.ilike.*servo*)"));
}

/// Expect whitespace-only search text to add no filter at all.
#[test]
fn blank_search_adds_no_filter() {
    let filter = TopicFilter {
        category_id: None,
        search: "   ".to_string(),
    };

    let path = topics_query(&filter).path();

    assert!(!path.contains("&or="));
}

/// Expect search terms to be percent-encoded inside the pattern.
#[test]
fn encodes_search_terms() {
    let filter = TopicFilter {
        category_id: None,
        search: "pid tuning".to_string(),
    };

    let path = topics_query(&filter).path();

    assert!(path.contains("*pid%20tuning*"));
}

/// Expect characters structural to the filter grammar to be stripped from
/// search terms rather than corrupting the expression.
#[test]
fn strips_structural_characters_from_search() {
    let filter = TopicFilter {
        category_id: None,
        search: "a,(b)".to_string(),
    };

    let path = topics_query(&filter).path();

    assert!(path.contains("&or=(title.ilike.*ab*,content.ilike.*ab*)"));
}

/// Expect categories to come back ordered by name for the sidebar.
#[test]
fn orders_categories_by_name() {
    let path = categories_query().path();

    assert_eq!(path, "/rest/v1/categories?select=*&order=name.asc");
}

/// Expect the topic detail to be a single object with the full author and
/// category rows embedded.
#[test]
fn topic_detail_is_single_with_embeds() {
    let query = topic_query("abc123");

    assert!(query.is_single());
    let path = query.path();
    assert!(path.contains("select=*,profiles(*),categories(*)"));
    assert!(path.contains("&id=eq.abc123"));
}

/// Expect replies to come back oldest first within their topic.
#[test]
fn orders_replies_oldest_first() {
    let path = replies_query("abc123").path();

    assert!(path.contains("&topic_id=eq.abc123"));
    assert!(path.ends_with("&order=created_at.asc"));
}

/// Expect the profile lookup to filter on the owning account and request a
/// single object.
#[test]
fn profile_lookup_filters_on_account() {
    let query = profile_query("user-1");

    assert!(query.is_single());
    assert!(query.path().contains("&user_id=eq.user-1"));
}

/// Expect insert and procedure-call paths to share the data-API prefix.
#[test]
fn builds_insert_and_rpc_paths() {
    assert_eq!(insert_path("topics"), "/rest/v1/topics");
    assert_eq!(
        rpc_path("increment_view_count"),
        "/rest/v1/rpc/increment_view_count"
    );
}

/// Expect reserved characters to be percent-encoded.
#[test]
fn encodes_reserved_characters() {
    assert_eq!(encode_component("a@b.com"), "a%40b.com");
    assert_eq!(encode_component("50% done"), "50%25%20done");
    assert_eq!(encode_component("plain-text_1.0~"), "plain-text_1.0~");
}
