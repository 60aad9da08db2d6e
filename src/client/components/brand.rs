use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBolt;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

/// Logo mark linking back to the landing page.
#[component]
pub fn BrandMark() -> Element {
    rsx!(
        Link { to: Route::Landing {}, class: "flex items-center gap-2",
            div { class: "w-8 h-8 bg-primary rounded-lg flex items-center justify-center",
                Icon {
                    width: 20,
                    height: 20,
                    fill: "white",
                    icon: FaBolt
                }
            }
            span { class: "text-xl font-bold", "KITERETSU" }
        }
    )
}
