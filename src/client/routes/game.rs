use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowLeft, FaDisplay, FaGamepad, FaGear, FaLayerGroup,
};
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn Game() -> Element {
    rsx!(
        Title { "3D Simulator | KITERETSU" }
        Meta {
            name: "description",
            content: "Immersive robotics learning in an advanced 3D simulation environment."
        }
        Page {
            div { class: "bg-base-200 border-b border-base-300",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                    div { class: "mb-6",
                        Link { to: Route::Landing {}, class: "btn btn-ghost btn-sm",
                            Icon { width: 16, height: 16, icon: FaArrowLeft }
                            "Back to Home"
                        }
                    }
                    div { class: "text-center max-w-3xl mx-auto",
                        h1 { class: "text-4xl font-bold mb-4", "3D Robotics Simulator" }
                        p { class: "text-xl text-base-content/70",
                            "Experience immersive robotics learning in our advanced 3D \
                            simulation environment"
                        }
                    }
                }
            }

            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-8",
                    div { class: "lg:col-span-2",
                        div { class: "card bg-base-100 shadow-md",
                            div { class: "card-body p-0",
                                div { class: "aspect-video bg-base-200 rounded-lg flex items-center justify-center",
                                    div { class: "text-center space-y-6",
                                        div { class: "w-24 h-24 bg-primary rounded-2xl flex items-center justify-center mx-auto",
                                            Icon { width: 48, height: 48, fill: "white", icon: FaLayerGroup }
                                        }
                                        div {
                                            h3 { class: "text-2xl font-bold mb-2", "Simulator Loading..." }
                                            p { class: "text-base-content/70",
                                                "The 3D environment is being prepared for your first mission."
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "space-y-6",
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body",
                                h3 { class: "card-title flex items-center gap-2",
                                    Icon { width: 20, height: 20, icon: FaGamepad }
                                    "Controls"
                                }
                                ul { class: "space-y-2 text-sm text-base-content/70",
                                    li { "Drag to orbit the camera around your robot" }
                                    li { "Scroll to zoom in on circuit components" }
                                    li { "Click a component to open its configuration" }
                                }
                            }
                        }
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body",
                                h3 { class: "card-title flex items-center gap-2",
                                    Icon { width: 20, height: 20, icon: FaGear }
                                    "Missions"
                                }
                                p { class: "text-sm text-base-content/70",
                                    "Each mission drops your robot into a scenario with a goal, \
                                    a parts budget, and a scoring rubric. Badges unlock as you \
                                    clear them."
                                }
                            }
                        }
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body",
                                h3 { class: "card-title flex items-center gap-2",
                                    Icon { width: 20, height: 20, icon: FaDisplay }
                                    "Requirements"
                                }
                                p { class: "text-sm text-base-content/70",
                                    "Runs in any modern browser with WebGL 2. A dedicated GPU is \
                                    recommended for the larger arenas."
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
