use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaCircleExclamation};
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::use_auth;
use crate::client::util::validate_topic::validate_topic;
use crate::model::forum::Category;

#[component]
pub fn NewTopic() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let mut title = use_signal(String::new);
    let mut category_id = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut form_error = use_signal(|| None::<String>);

    // Signed-out visitors are sent to the auth screen once the bootstrap
    // has settled.
    use_effect(move || {
        let state = auth.snapshot();
        if !state.loading && !state.profile_loading && state.user.is_none() {
            nav.push(Route::Auth { signup: false });
        }
    });

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

    let state = auth.snapshot();

    // Block the whole page while the profile is still resolving.
    if state.loading || state.profile_loading || state.user.is_none() {
        return rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg text-primary" }
            }
        );
    }

    // Resolution exhausted without a profile: writes stay blocked and the
    // only way forward is re-authenticating.
    if state.profile.is_none() {
        return rsx!(
            div { class: "min-h-screen flex flex-col items-center justify-center text-center p-4",
                Icon { width: 48, height: 48, class: "text-error mb-4", icon: FaCircleExclamation }
                h1 { class: "text-2xl font-bold mb-2", "Profile Error" }
                p { class: "text-base-content/70 mb-6",
                    "We couldn't load your user profile. Please try signing out and back in."
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.push(Route::Auth { signup: false });
                    },
                    "Go to Sign In"
                }
            }
        );
    }

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        let title_value = title.peek().clone();
        let category_value = category_id.peek().clone();
        let content_value = content.peek().clone();

        // Invalid drafts never reach the backend.
        if let Err(err) = validate_topic(&title_value, &category_value, &content_value) {
            form_error.set(Some(err.to_string()));
            return;
        }

        let snapshot = auth.snapshot();
        let (Some(session), Some(profile)) = (snapshot.session, snapshot.profile) else {
            form_error.set(Some("You must have a valid profile to create a topic.".to_string()));
            return;
        };

        // The topic references the resolved profile, not the account: the
        // remote schema keys authorship off the profiles table.
        let payload = crate::model::forum::NewTopic {
            title: title_value.trim().to_string(),
            content: content_value.trim().to_string(),
            category_id: category_value,
            author_id: profile.id,
        };

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::api;

            submitting.set(true);
            form_error.set(None);
            match api::forum::create_topic(&session.access_token, &payload).await {
                Ok(()) => {
                    nav.push(Route::Forum {});
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    rsx!(
        Title { "New Topic | KITERETSU" }
        Meta {
            name: "description",
            content: "Start a new discussion in the community forum."
        }
        Page {
            div { class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                div { class: "mb-6",
                    Link { to: Route::Forum {}, class: "btn btn-ghost btn-sm",
                        Icon { width: 16, height: 16, icon: FaArrowLeft }
                        "Back to Forum"
                    }
                }

                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h1 { class: "card-title text-2xl font-bold", "Create a New Topic" }
                        form { class: "space-y-6", onsubmit: on_submit,
                            div { class: "form-control",
                                label { class: "label", span { class: "label-text", "Topic Title" } }
                                input {
                                    class: "input input-bordered w-full",
                                    placeholder: "Enter a descriptive title for your topic",
                                    value: "{title}",
                                    oninput: move |event| title.set(event.value()),
                                }
                            }

                            div { class: "form-control",
                                label { class: "label", span { class: "label-text", "Category" } }
                                select {
                                    class: "select select-bordered w-full",
                                    onchange: move |event| category_id.set(event.value()),
                                    option { value: "", disabled: true, selected: category_id.read().is_empty(),
                                        "Select a category"
                                    }
                                    for category in categories {
                                        option { value: "{category.id}", "{category.name}" }
                                    }
                                }
                            }

                            div { class: "form-control",
                                label { class: "label", span { class: "label-text", "Content" } }
                                textarea {
                                    class: "textarea textarea-bordered w-full",
                                    rows: 10,
                                    placeholder: "Explain your topic in detail here...",
                                    value: "{content}",
                                    oninput: move |event| content.set(event.value()),
                                }
                            }

                            if let Some(message) = form_error() {
                                div { class: "alert alert-error",
                                    Icon { width: 16, height: 16, icon: FaCircleExclamation }
                                    "{message}"
                                }
                            }

                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner loading-sm" }
                                    "Submitting..."
                                } else {
                                    "Submit Topic"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
