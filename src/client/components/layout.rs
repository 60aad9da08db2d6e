use dioxus::prelude::*;

use crate::client::components::{Footer, Navbar};
use crate::client::router::Route;

/// Shared shell for the main site routes: fixed navbar, page content,
/// footer. The auth screen and the catch-all route render without it.
#[component]
pub fn SiteLayout() -> Element {
    rsx!(
        Navbar {}
        Outlet::<Route> {}
        Footer {}
    )
}
