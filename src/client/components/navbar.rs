use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaXmark};
use dioxus_free_icons::Icon;

use crate::client::components::BrandMark;
use crate::client::router::Route;
use crate::client::store::session::AuthPhase;
use crate::client::store::use_auth;

fn nav_links() -> Vec<(&'static str, Route)> {
    vec![
        ("Home", Route::Landing {}),
        ("Simulation", Route::Game {}),
        ("Forum", Route::Forum {}),
    ]
}

#[component]
pub fn Navbar() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx!(
        nav { class: "navbar fixed top-0 left-0 right-0 z-50 bg-base-100/80 backdrop-blur-md border-b border-base-300",
            div { class: "navbar-start",
                BrandMark {}
            }
            div { class: "navbar-center hidden md:flex",
                ul { class: "flex items-center gap-8",
                    for (name, route) in nav_links() {
                        li {
                            Link {
                                to: route,
                                class: "text-sm font-medium text-base-content/70 hover:text-base-content",
                                "{name}"
                            }
                        }
                    }
                }
            }
            div { class: "navbar-end",
                div { class: "hidden md:flex items-center gap-3",
                    AuthActions {}
                }
                div { class: "md:hidden",
                    button {
                        class: "btn btn-ghost btn-square",
                        onclick: move |_| {
                            let open = *menu_open.peek();
                            menu_open.set(!open);
                        },
                        if menu_open() {
                            Icon { width: 20, height: 20, icon: FaXmark }
                        } else {
                            Icon { width: 20, height: 20, icon: FaBars }
                        }
                    }
                }
            }
        }

        if menu_open() {
            div { class: "md:hidden fixed top-[64px] left-0 right-0 z-40 bg-base-100 border-b border-base-300",
                ul { class: "flex flex-col gap-1 p-3",
                    for (name, route) in nav_links() {
                        li {
                            Link {
                                to: route,
                                class: "block px-3 py-2 text-sm font-medium rounded-lg hover:bg-base-200",
                                onclick: move |_| menu_open.set(false),
                                "{name}"
                            }
                        }
                    }
                    li { class: "flex flex-col gap-2 px-3 pt-3",
                        AuthActions {}
                    }
                }
            }
        }
    )
}

/// Right-hand affordances: sign-in/sign-up for visitors, the resolved
/// username and a sign-out button for authenticated users. Nothing renders
/// until the bootstrap's first resolution completes.
#[component]
fn AuthActions() -> Element {
    let auth = use_auth();
    let state = auth.snapshot();

    match state.phase() {
        AuthPhase::Initializing => rsx!(),
        AuthPhase::Unauthenticated => rsx!(
            Link { to: Route::Auth { signup: false }, class: "btn btn-ghost btn-sm", "Sign In" }
            Link { to: Route::Auth { signup: true }, class: "btn btn-primary btn-sm", "Sign Up" }
        ),
        AuthPhase::AuthenticatedNoProfile | AuthPhase::AuthenticatedWithProfile => rsx!(
            if let Some(profile) = &state.profile {
                span { class: "text-sm text-base-content/70", "{profile.username}" }
            }
            button {
                class: "btn btn-outline btn-sm",
                onclick: move |_| {
                    #[cfg(feature = "web")]
                    spawn(async move {
                        auth.sign_out().await;
                    });
                },
                "Sign Out"
            }
        ),
    }
}
