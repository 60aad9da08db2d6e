use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaPaperPlane};
use dioxus_free_icons::Icon;

use chrono::Utc;

use crate::client::components::forum::ReplyCard;
use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::use_auth;
use crate::client::util::time::format_time_ago;
use crate::model::forum::NewReply;

#[component]
pub fn TopicPage(topic_id: String) -> Element {
    let auth = use_auth();
    let mut reload = use_signal(|| 0u32);
    let mut new_reply = use_signal(String::new);
    let mut replying = use_signal(|| false);
    let mut reply_error = use_signal(|| None::<String>);

    // The view counter is bumped from a mount-once hook so the reply
    // refetch below cannot re-increment it.
    #[cfg(feature = "web")]
    {
        let topic_id = topic_id.clone();
        use_hook(move || {
            spawn(async move {
                use dioxus_logger::tracing;

                use crate::client::api;

                if let Err(err) = api::forum::increment_view_count(&topic_id).await {
                    tracing::warn!("Failed to increment view count for topic {}: {}", topic_id, err);
                }
            });
        });
    }

    #[cfg(feature = "web")]
    let fetched = {
        use crate::client::api::{self, ApiError};

        let topic_id = topic_id.clone();
        let resource = use_resource(move || {
            reload();
            let topic_id = topic_id.clone();
            async move {
                let topic = api::forum::fetch_topic(&topic_id).await?;
                let replies = api::forum::fetch_replies(&topic_id).await?;
                Ok::<_, ApiError>((topic, replies))
            }
        });
        let value = resource.read_unchecked();
        (*value).clone()
    };
    #[cfg(not(feature = "web"))]
    let fetched: Option<
        Result<
            (
                Option<crate::model::forum::TopicDetail>,
                Vec<crate::model::forum::Reply>,
            ),
            crate::client::api::ApiError,
        >,
    > = None;

    let state = auth.snapshot();

    let on_reply = {
        let topic_id = topic_id.clone();
        move |_| {
            let content = new_reply.peek().trim().to_string();
            if content.is_empty() {
                return;
            }
            let snapshot = auth.snapshot();
            let (Some(session), Some(profile)) = (snapshot.session, snapshot.profile) else {
                return;
            };
            let topic_id = topic_id.clone();
            // The reply references the resolved profile, not the account.
            let payload = NewReply {
                content,
                topic_id,
                author_id: profile.id,
            };
            #[cfg(feature = "web")]
            spawn(async move {
                use crate::client::api;

                replying.set(true);
                reply_error.set(None);
                match api::forum::create_reply(&session.access_token, &payload).await {
                    Ok(()) => {
                        new_reply.set(String::new());
                        reload += 1;
                    }
                    Err(err) => reply_error.set(Some(err.to_string())),
                }
                replying.set(false);
            });
        }
    };

    let body = match fetched {
        None => rsx!(
            div { class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12 space-y-4",
                div { class: "skeleton h-8 w-3/4" }
                div { class: "skeleton h-4 w-1/2" }
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body space-y-4",
                        div { class: "skeleton h-24 w-full" }
                        div { class: "flex items-center gap-4",
                            div { class: "skeleton h-10 w-10 rounded-full" }
                            div { class: "skeleton h-4 w-64" }
                        }
                    }
                }
            }
        ),
        Some(Err(err)) => {
            let message = err.to_string();
            rsx!(
                div { class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                    div { class: "alert alert-error", "{message}" }
                }
            )
        }
        Some(Ok((None, _))) => rsx!(
            div { class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12 text-center",
                h1 { class: "text-2xl font-bold mb-4", "Topic not found" }
                Link { to: Route::Forum {}, class: "btn btn-ghost",
                    Icon { width: 16, height: 16, icon: FaArrowLeft }
                    "Back to Forum"
                }
            }
        ),
        Some(Ok((Some(topic), replies))) => {
            let posted = format_time_ago(topic.created_at, Utc::now());
            let author = topic
                .author
                .as_ref()
                .map(|profile| profile.username.clone())
                .unwrap_or_else(|| "Unknown".to_string());
            let reply_count = replies.len();

            rsx!(
                div { class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                    Link { to: Route::Forum {}, class: "inline-flex items-center gap-2 text-sm text-base-content/70 hover:text-base-content mb-4",
                        Icon { width: 16, height: 16, icon: FaArrowLeft }
                        "Back to Forum"
                    }

                    div { class: "mb-6",
                        if let Some(category) = &topic.category {
                            span {
                                class: "badge mb-2",
                                style: "background-color: {category.color}20; color: {category.color}",
                                "{category.name}"
                            }
                        }
                        h1 { class: "text-3xl font-bold", "{topic.title}" }
                        div { class: "text-sm text-base-content/60 mt-2 flex items-center gap-4",
                            span { "Posted by {author}" }
                            span { "{posted}" }
                        }
                    }

                    div { class: "card bg-base-100 shadow-sm mb-8",
                        div { class: "card-body p-6",
                            p { "{topic.content}" }
                        }
                    }

                    h2 { class: "text-2xl font-bold mb-4", "{reply_count} Replies" }
                    div { class: "space-y-6",
                        for reply in replies {
                            ReplyCard { reply }
                        }
                    }

                    if state.user.is_some() {
                        div { class: "card bg-base-100 shadow-sm mt-8",
                            div { class: "card-body",
                                h3 { class: "card-title", "Post a Reply" }
                                div { class: "space-y-4",
                                    textarea {
                                        class: "textarea textarea-bordered w-full min-h-[120px]",
                                        placeholder: "Write your reply here...",
                                        value: "{new_reply}",
                                        oninput: move |event| new_reply.set(event.value()),
                                    }
                                    if let Some(message) = reply_error() {
                                        div { class: "alert alert-error", "{message}" }
                                    }
                                    if state.profile.is_some() {
                                        button {
                                            class: "btn btn-primary",
                                            disabled: replying(),
                                            onclick: on_reply,
                                            Icon { width: 16, height: 16, fill: "white", icon: FaPaperPlane }
                                            if replying() { "Posting..." } else { "Post Reply" }
                                        }
                                    } else if state.profile_loading {
                                        button { class: "btn btn-primary", disabled: true, "Loading profile..." }
                                    } else {
                                        p { class: "text-sm text-error",
                                            "We couldn't load your profile. Try signing out and back in."
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        div { class: "card bg-base-100 shadow-sm mt-8",
                            div { class: "card-body text-center",
                                p { class: "text-base-content/70",
                                    Link { to: Route::Auth { signup: false }, class: "text-primary hover:underline", "Sign in" }
                                    " to post a reply."
                                }
                            }
                        }
                    }
                }
            )
        }
    };

    rsx!(
        Title { "Topic | KITERETSU" }
        Meta {
            name: "description",
            content: "Community forum discussion."
        }
        Page {
            {body}
        }
    )
}
