use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendar, FaEye, FaHeart, FaMessage, FaThumbtack};
use dioxus_free_icons::Icon;

use crate::client::router::Route;
use crate::client::util::time::format_time_ago;
use crate::model::forum::TopicSummary;

/// Content preview length on listing cards.
const PREVIEW_CHARS: usize = 150;

fn preview(content: &str) -> String {
    if content.chars().count() <= PREVIEW_CHARS {
        content.to_string()
    } else {
        let cut: String = content.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    }
}

#[component]
pub fn TopicCard(topic: TopicSummary) -> Element {
    let posted = format_time_ago(topic.created_at, Utc::now());
    let author = topic
        .author
        .as_ref()
        .map(|author| author.username.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let preview_text = preview(&topic.content);

    rsx!(
        div { class: "card bg-base-100 shadow-sm hover:shadow-md",
            div { class: "card-body p-6",
                div { class: "flex items-start gap-4",
                    div { class: "flex-1",
                        div { class: "flex items-center gap-2 mb-2",
                            if topic.is_pinned {
                                Icon { width: 16, height: 16, class: "text-primary", icon: FaThumbtack }
                            }
                            if let Some(category) = &topic.category {
                                span {
                                    class: "badge badge-sm",
                                    style: "background-color: {category.color}20; color: {category.color}",
                                    "{category.name}"
                                }
                            }
                        }
                        Link { to: Route::TopicPage { topic_id: topic.id.clone() },
                            h3 { class: "text-lg font-semibold hover:text-primary mb-2", "{topic.title}" }
                            p { class: "text-sm text-base-content/70 mb-3", "{preview_text}" }
                        }
                        div { class: "flex items-center gap-4 text-sm text-base-content/60",
                            span { "by {author}" }
                            span { class: "flex items-center gap-1",
                                Icon { width: 16, height: 16, icon: FaCalendar }
                                "{posted}"
                            }
                        }
                    }
                    div { class: "flex flex-col items-center gap-3 text-sm text-base-content/60",
                        span { class: "flex items-center gap-1", title: "Replies",
                            Icon { width: 16, height: 16, icon: FaMessage }
                            "{topic.reply_count}"
                        }
                        span { class: "flex items-center gap-1", title: "Likes",
                            Icon { width: 16, height: 16, icon: FaHeart }
                            "{topic.like_count}"
                        }
                        span { class: "flex items-center gap-1", title: "Views",
                            Icon { width: 16, height: 16, icon: FaEye }
                            "{topic.view_count}"
                        }
                    }
                }
            }
        }
    )
}
