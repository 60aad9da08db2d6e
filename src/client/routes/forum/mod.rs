pub mod new_topic;
pub mod topic;

pub use new_topic::NewTopic;
pub use topic::TopicPage;

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowTrendUp, FaMagnifyingGlass, FaMessage, FaPlus, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::client::components::forum::TopicCard;
use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::use_auth;
use crate::model::forum::Category;

#[component]
pub fn Forum() -> Element {
    let auth = use_auth();
    let mut selected_category = use_signal(|| None::<String>);
    let mut search = use_signal(String::new);

    #[cfg(feature = "web")]
    let categories: Vec<Category> = {
        use dioxus_logger::tracing;

        use crate::client::api;

        let resource = use_resource(|| async move { api::forum::fetch_categories().await });
        match &*resource.read_unchecked() {
            Some(Ok(list)) => list.clone(),
            Some(Err(err)) => {
                tracing::error!("Failed to load categories: {}", err);
                Vec::new()
            }
            None => Vec::new(),
        }
    };
    #[cfg(not(feature = "web"))]
    let categories: Vec<Category> = Vec::new();

    // Re-runs whenever the selected category or the search text changes.
    #[cfg(feature = "web")]
    let topics = {
        use crate::client::api::{self, forum::TopicFilter};

        let resource = use_resource(move || {
            let filter = TopicFilter {
                category_id: selected_category(),
                search: search(),
            };
            async move { api::forum::fetch_topics(&filter).await }
        });
        let fetched = resource.read_unchecked();
        (*fetched).clone()
    };
    #[cfg(not(feature = "web"))]
    let topics: Option<Result<Vec<crate::model::forum::TopicSummary>, crate::client::api::ApiError>> =
        None;

    let state = auth.snapshot();
    let signed_in = state.user.is_some();
    let filtered = selected_category.read().is_some() || !search.read().trim().is_empty();
    let topic_count = topics
        .as_ref()
        .and_then(|fetched| fetched.as_ref().ok())
        .map(|list| list.len())
        .unwrap_or(0);
    let category_count = categories.len();

    let topic_list = match topics {
        None => rsx!(
            div { class: "space-y-4",
                for _ in 0..5 {
                    div { class: "card bg-base-100 shadow-sm",
                        div { class: "card-body p-6 space-y-3",
                            div { class: "skeleton h-5 w-1/4" }
                            div { class: "skeleton h-6 w-3/4" }
                            div { class: "skeleton h-4 w-full" }
                            div { class: "skeleton h-4 w-2/3" }
                        }
                    }
                }
            }
        ),
        Some(Err(err)) => {
            let message = err.to_string();
            rsx!(
                div { class: "alert alert-error", "{message}" }
            )
        }
        Some(Ok(list)) if !list.is_empty() => rsx!(
            div { class: "space-y-4",
                for topic in list {
                    TopicCard { topic }
                }
            }
        ),
        Some(Ok(_)) => rsx!(
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body items-center text-center p-12",
                    Icon { width: 48, height: 48, class: "text-base-content/40 mb-4", icon: FaMessage }
                    h3 { class: "text-lg font-semibold mb-2", "No topics found" }
                    p { class: "text-base-content/70 mb-6",
                        if filtered {
                            "Try adjusting your search or category filter"
                        } else {
                            "Be the first to start a discussion!"
                        }
                    }
                    if signed_in {
                        Link { to: Route::NewTopic {}, class: "btn btn-primary",
                            Icon { width: 16, height: 16, fill: "white", icon: FaPlus }
                            "Create First Topic"
                        }
                    }
                }
            }
        ),
    };

    rsx!(
        Title { "Community Forum | KITERETSU" }
        Meta {
            name: "description",
            content: "Connect with fellow robotics enthusiasts, share knowledge, and get help."
        }
        Page {
            // Header band
            div { class: "bg-base-200 border-b border-base-300",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                    div { class: "flex flex-col md:flex-row md:items-center md:justify-between gap-6",
                        div {
                            h1 { class: "text-3xl font-bold mb-2", "Community Forum" }
                            p { class: "text-base-content/70",
                                "Connect with fellow robotics enthusiasts, share knowledge, and get help"
                            }
                        }
                        if signed_in {
                            Link { to: Route::NewTopic {}, class: "btn btn-primary btn-lg",
                                Icon { width: 20, height: 20, fill: "white", icon: FaPlus }
                                "New Topic"
                            }
                        } else {
                            Link { to: Route::Auth { signup: false }, class: "btn btn-primary btn-lg",
                                Icon { width: 20, height: 20, fill: "white", icon: FaUsers }
                                "Sign In to Post"
                            }
                        }
                    }
                }
            }

            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                div { class: "grid grid-cols-1 lg:grid-cols-4 gap-8",
                    // Sidebar
                    div { class: "lg:col-span-1 space-y-6",
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body",
                                h2 { class: "card-title text-lg", "Search Topics" }
                                label { class: "input input-bordered flex items-center gap-2",
                                    Icon { width: 16, height: 16, class: "text-base-content/50", icon: FaMagnifyingGlass }
                                    input {
                                        class: "grow",
                                        placeholder: "Search discussions...",
                                        value: "{search}",
                                        oninput: move |event| search.set(event.value()),
                                    }
                                }
                            }
                        }

                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body",
                                h2 { class: "card-title text-lg", "Categories" }
                                div { class: "space-y-2",
                                    button {
                                        class: if selected_category.read().is_none() {
                                            "w-full text-left px-3 py-2 rounded-lg bg-primary text-primary-content"
                                        } else {
                                            "w-full text-left px-3 py-2 rounded-lg hover:bg-base-200"
                                        },
                                        onclick: move |_| selected_category.set(None),
                                        "All Categories"
                                    }
                                    for category in categories.clone() {
                                        CategoryButton {
                                            category,
                                            selected_category,
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body",
                                h2 { class: "card-title text-lg flex items-center gap-2",
                                    Icon { width: 20, height: 20, icon: FaArrowTrendUp }
                                    "Forum Stats"
                                }
                                div { class: "space-y-3",
                                    div { class: "flex justify-between items-center",
                                        span { class: "text-sm text-base-content/70", "Total Topics" }
                                        span { class: "font-semibold", "{topic_count}" }
                                    }
                                    div { class: "flex justify-between items-center",
                                        span { class: "text-sm text-base-content/70", "Categories" }
                                        span { class: "font-semibold", "{category_count}" }
                                    }
                                }
                            }
                        }
                    }

                    // Topic list
                    div { class: "lg:col-span-3",
                        {topic_list}
                    }
                }
            }
        }
    )
}

/// Sidebar entry for one category, highlighted when selected.
#[component]
fn CategoryButton(category: Category, selected_category: Signal<Option<String>>) -> Element {
    let mut selected_category = selected_category;
    let selected = selected_category.read().as_deref() == Some(category.id.as_str());
    let id = category.id.clone();

    rsx!(
        button {
            class: if selected {
                "w-full text-left px-3 py-2 rounded-lg bg-primary text-primary-content"
            } else {
                "w-full text-left px-3 py-2 rounded-lg hover:bg-base-200"
            },
            onclick: move |_| selected_category.set(Some(id.clone())),
            div { class: "flex items-center gap-2",
                div {
                    class: "w-3 h-3 rounded-full",
                    style: "background-color: {category.color}",
                }
                span { class: "text-sm font-medium", "{category.name}" }
            }
        }
    )
}
