use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBolt;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn Footer() -> Element {
    rsx!(
        footer { class: "bg-neutral text-neutral-content",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                div { class: "grid grid-cols-1 md:grid-cols-4 gap-8",
                    div { class: "md:col-span-2",
                        div { class: "flex items-center gap-2 mb-4",
                            div { class: "w-8 h-8 bg-primary rounded-lg flex items-center justify-center",
                                Icon { width: 20, height: 20, fill: "white", icon: FaBolt }
                            }
                            span { class: "text-xl font-bold", "KITERETSU" }
                        }
                        p { class: "text-neutral-content/70 max-w-md",
                            "Professional robotics learning platform with 3D micro-simulators. \
                            Learn by doing with hands-on circuit design and programming challenges."
                        }
                    }
                    div {
                        h3 { class: "font-semibold mb-4", "Quick Links" }
                        ul { class: "space-y-2",
                            li {
                                Link { to: Route::Landing {}, class: "text-neutral-content/70 hover:text-neutral-content", "Home" }
                            }
                            li {
                                Link { to: Route::Game {}, class: "text-neutral-content/70 hover:text-neutral-content", "Simulation" }
                            }
                            li {
                                Link { to: Route::Forum {}, class: "text-neutral-content/70 hover:text-neutral-content", "Forum" }
                            }
                        }
                    }
                    div {
                        h3 { class: "font-semibold mb-4", "Support" }
                        ul { class: "space-y-2",
                            li {
                                Link { to: Route::Forum {}, class: "text-neutral-content/70 hover:text-neutral-content", "Help Center" }
                            }
                            li {
                                Link { to: Route::Forum {}, class: "text-neutral-content/70 hover:text-neutral-content", "Community" }
                            }
                            li {
                                a {
                                    href: "mailto:support@kiteretsu.com",
                                    class: "text-neutral-content/70 hover:text-neutral-content",
                                    "Contact"
                                }
                            }
                        }
                    }
                }
                div { class: "border-t border-neutral-content/20 mt-8 pt-8 text-center",
                    p { class: "text-neutral-content/70", "© 2024 KITERETSU. All rights reserved." }
                }
            }
        }
    )
}
