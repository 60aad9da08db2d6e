use dioxus::prelude::*;

use crate::client::router::Route;
use crate::client::store::AuthProvider;

/// Application root: styling, the auth store, and the router.
#[component]
pub fn App() -> Element {
    rsx!(
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Stylesheet { href: "https://cdn.jsdelivr.net/npm/daisyui@4.12.14/dist/full.min.css" }
        AuthProvider {
            Router::<Route> {}
        }
    )
}
