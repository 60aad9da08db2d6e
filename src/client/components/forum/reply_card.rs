use chrono::Utc;
use dioxus::prelude::*;

use crate::client::util::time::format_time_ago;
use crate::model::forum::Reply;

fn initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string())
}

#[component]
pub fn ReplyCard(reply: Reply) -> Element {
    let posted = format_time_ago(reply.created_at, Utc::now());
    let username = reply
        .author
        .as_ref()
        .map(|author| author.username.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let avatar_url = reply.author.as_ref().and_then(|author| author.avatar_url.clone());
    let fallback = initial(&username);

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body p-6",
                div { class: "flex items-start gap-4",
                    if let Some(url) = avatar_url {
                        div { class: "avatar",
                            div { class: "w-10 h-10 rounded-full",
                                img { src: "{url}", alt: "{username}" }
                            }
                        }
                    } else {
                        div { class: "avatar placeholder",
                            div { class: "w-10 h-10 rounded-full bg-primary text-primary-content flex items-center justify-center",
                                span { "{fallback}" }
                            }
                        }
                    }
                    div { class: "flex-1",
                        div { class: "flex items-center justify-between",
                            p { class: "font-semibold", "{username}" }
                            p { class: "text-sm text-base-content/60", "{posted}" }
                        }
                        p { class: "mt-2", "{reply.content}" }
                    }
                }
            }
        }
    )
}
