use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleExclamation, FaEnvelope, FaLock, FaUser};
use dioxus_free_icons::Icon;

use crate::client::components::BrandMark;
use crate::client::router::Route;
use crate::client::store::use_auth;

#[component]
pub fn Auth(signup: bool) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let mut is_signup = use_signal(|| signup);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    // Already signed in: this screen has nothing to offer.
    use_effect(move || {
        if auth.snapshot().user.is_some() {
            nav.push(Route::Landing {});
        }
    });

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        #[cfg(feature = "web")]
        spawn(async move {
            loading.set(true);
            error.set(None);
            notice.set(None);

            let email_value = email.peek().trim().to_string();
            let password_value = password.peek().clone();

            if *is_signup.peek() {
                let username_value = username.peek().trim().to_string();
                let username_opt = (!username_value.is_empty()).then_some(username_value);
                match auth
                    .sign_up(&email_value, &password_value, username_opt.as_deref())
                    .await
                {
                    Ok(()) => notice.set(Some(
                        "Please check your email to verify your account before signing in."
                            .to_string(),
                    )),
                    Err(err) => error.set(Some(err.to_string())),
                }
            } else if let Err(err) = auth.sign_in(&email_value, &password_value).await {
                error.set(Some(err.to_string()));
            }

            loading.set(false);
        });
    };

    rsx!(
        Title { "Sign In | KITERETSU" }
        Meta {
            name: "description",
            content: "Sign in to the robotics learning community."
        }
        div { class: "min-h-screen bg-base-200 flex items-center justify-center px-4",
            div { class: "w-full max-w-md",
                div { class: "flex justify-center mb-8",
                    BrandMark {}
                }

                div { class: "card bg-base-100 shadow-xl",
                    div { class: "card-body",
                        div { class: "text-center mb-2",
                            h1 { class: "text-2xl font-bold",
                                if is_signup() { "Create Account" } else { "Welcome Back" }
                            }
                            p { class: "text-base-content/70",
                                if is_signup() {
                                    "Join the robotics learning community"
                                } else {
                                    "Sign in to your account"
                                }
                            }
                        }

                        form { class: "space-y-6", onsubmit: on_submit,
                            if is_signup() {
                                div { class: "form-control",
                                    label { class: "label",
                                        span { class: "label-text flex items-center gap-2",
                                            Icon { width: 16, height: 16, icon: FaUser }
                                            "Username"
                                        }
                                    }
                                    input {
                                        class: "input input-bordered w-full",
                                        placeholder: "Choose a username",
                                        value: "{username}",
                                        oninput: move |event| username.set(event.value()),
                                    }
                                }
                            }

                            div { class: "form-control",
                                label { class: "label",
                                    span { class: "label-text flex items-center gap-2",
                                        Icon { width: 16, height: 16, icon: FaEnvelope }
                                        "Email"
                                    }
                                }
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "email",
                                    required: true,
                                    placeholder: "your@email.com",
                                    value: "{email}",
                                    oninput: move |event| email.set(event.value()),
                                }
                            }

                            div { class: "form-control",
                                label { class: "label",
                                    span { class: "label-text flex items-center gap-2",
                                        Icon { width: 16, height: 16, icon: FaLock }
                                        "Password"
                                    }
                                }
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "password",
                                    required: true,
                                    minlength: 6,
                                    placeholder: "Enter your password",
                                    value: "{password}",
                                    oninput: move |event| password.set(event.value()),
                                }
                            }

                            if let Some(message) = error() {
                                div { class: "alert alert-error",
                                    Icon { width: 16, height: 16, icon: FaCircleExclamation }
                                    "{message}"
                                }
                            }
                            if let Some(message) = notice() {
                                div { class: "alert alert-success", "{message}" }
                            }

                            button {
                                class: "btn btn-primary btn-lg w-full",
                                r#type: "submit",
                                disabled: loading(),
                                if loading() {
                                    "Loading..."
                                } else if is_signup() {
                                    "Create Account"
                                } else {
                                    "Sign In"
                                }
                            }
                        }

                        div { class: "mt-6 text-center",
                            p { class: "text-base-content/70",
                                if is_signup() { "Already have an account? " } else { "Don't have an account? " }
                                button {
                                    class: "text-primary hover:underline font-medium",
                                    onclick: move |_| {
                                        let flipped = !*is_signup.peek();
                                        is_signup.set(flipped);
                                        error.set(None);
                                        notice.set(None);
                                    },
                                    if is_signup() { "Sign In" } else { "Sign Up" }
                                }
                            }
                        }

                        div { class: "mt-6 pt-6 border-t border-base-300 text-center",
                            Link { to: Route::Landing {}, class: "text-base-content/70 hover:text-base-content",
                                "← Back to Home"
                            }
                        }
                    }
                }
            }
        }
    )
}
