use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaBolt};
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        div { class: "min-h-screen bg-base-200 flex items-center justify-center text-center px-4",
            div {
                div { class: "inline-flex items-center justify-center mb-8",
                    div { class: "w-16 h-16 bg-primary rounded-2xl flex items-center justify-center",
                        Icon { width: 32, height: 32, fill: "white", icon: FaBolt }
                    }
                }
                h1 { class: "text-6xl font-bold", "404" }
                p { class: "text-2xl font-medium text-base-content/70 mt-4 mb-2",
                    "Oops! The page you're looking for doesn't exist."
                }
                p { class: "text-sm text-base-content/50 mb-8", "{path}" }
                Link { to: Route::Landing {}, class: "btn btn-primary btn-lg",
                    Icon { width: 16, height: 16, fill: "white", icon: FaArrowLeft }
                    "Go Back Home"
                }
            }
        }
    )
}
