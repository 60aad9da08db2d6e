use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowRight, FaBullseye, FaMicrochip, FaPlay, FaTrophy, FaUsers,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::Page;
use crate::client::router::Route;

struct Feature {
    icon: Element,
    title: &'static str,
    description: &'static str,
}

struct TeamMember {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
    image: &'static str,
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: rsx!(Icon { width: 28, height: 28, fill: "white", icon: FaBullseye }),
            title: "Missions",
            description: "Complete challenging robotics missions with real-world scenarios",
        },
        Feature {
            icon: rsx!(Icon { width: 28, height: 28, fill: "white", icon: FaMicrochip }),
            title: "Circuit Overlay",
            description: "Interactive circuit design with visual feedback and debugging tools",
        },
        Feature {
            icon: rsx!(Icon { width: 28, height: 28, fill: "white", icon: FaTrophy }),
            title: "Badges",
            description: "Earn achievements as you master different robotics concepts",
        },
    ]
}

fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Dr. Sarah Chen",
            role: "Lead Robotics Engineer",
            bio: "Former NASA engineer with 15+ years in autonomous systems",
            image: "https://images.unsplash.com/photo-1494790108755-2616b332-0c04?w=300&h=300&fit=crop",
        },
        TeamMember {
            name: "Alex Kumar",
            role: "Educational Designer",
            bio: "PhD in Educational Technology, specializing in STEM learning",
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=300&fit=crop",
        },
        TeamMember {
            name: "Maria Rodriguez",
            role: "3D Simulation Lead",
            bio: "Expert in real-time 3D graphics and physics simulation",
            image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=300&h=300&fit=crop",
        },
        TeamMember {
            name: "James Thompson",
            role: "Backend Architect",
            bio: "Full-stack engineer with expertise in scalable learning platforms",
            image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=300&h=300&fit=crop",
        },
    ]
}

#[component]
pub fn Landing() -> Element {
    let mut email = use_signal(String::new);
    let mut joined = use_signal(|| false);

    rsx!(
        Title { "KITERETSU | Robotics Learning Platform" }
        Meta {
            name: "description",
            content: "Professional robotics learning platform with 3D micro-simulators."
        }
        Page { class: "bg-base-100",
            // Hero
            section { class: "bg-gradient-to-b from-base-200 to-base-100 border-b border-base-300",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 text-center",
                    h1 { class: "text-5xl font-bold mb-6",
                        "Learn Robotics by "
                        span { class: "text-primary", "Doing" }
                    }
                    p { class: "text-xl text-base-content/70 max-w-2xl mx-auto mb-10",
                        "Master circuit design and robot programming in an immersive 3D \
                        simulation environment built for curious minds."
                    }
                    div { class: "flex flex-wrap justify-center gap-4",
                        Link { to: Route::Game {}, class: "btn btn-primary btn-lg",
                            Icon { width: 20, height: 20, fill: "white", icon: FaPlay }
                            "Try the Simulator"
                        }
                        Link { to: Route::Forum {}, class: "btn btn-outline btn-lg",
                            Icon { width: 20, height: 20, icon: FaUsers }
                            "Join the Community"
                        }
                    }
                }
            }

            // Features
            section { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20",
                h2 { class: "text-3xl font-bold text-center mb-12", "Everything you need to build" }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                    for feature in features() {
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body items-center text-center",
                                div { class: "w-14 h-14 bg-primary rounded-xl flex items-center justify-center mb-4",
                                    {feature.icon}
                                }
                                h3 { class: "card-title", "{feature.title}" }
                                p { class: "text-base-content/70", "{feature.description}" }
                            }
                        }
                    }
                }
            }

            // Team
            section { id: "team", class: "bg-base-200",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20",
                    h2 { class: "text-3xl font-bold text-center mb-12", "Meet the Team" }
                    div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8",
                        for member in team() {
                            div { class: "card bg-base-100 shadow-sm",
                                div { class: "card-body items-center text-center",
                                    div { class: "avatar mb-4",
                                        div { class: "w-24 rounded-full",
                                            img { src: "{member.image}", alt: "{member.name}" }
                                        }
                                    }
                                    h3 { class: "font-semibold", "{member.name}" }
                                    p { class: "text-sm text-primary", "{member.role}" }
                                    p { class: "text-sm text-base-content/70", "{member.bio}" }
                                }
                            }
                        }
                    }
                }
            }

            // Waitlist
            section { class: "max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-20 text-center",
                h2 { class: "text-3xl font-bold mb-4", "Be first in line" }
                p { class: "text-base-content/70 mb-8",
                    "New missions and curriculum tracks land regularly. \
                    Join the waitlist to hear about them first."
                }
                if joined() {
                    div { class: "alert alert-success justify-center",
                        "Thanks! You're on the list."
                    }
                } else {
                    form {
                        class: "flex flex-col sm:flex-row justify-center gap-3",
                        onsubmit: move |event: FormEvent| {
                            event.prevent_default();
                            let address = email.peek().trim().to_string();
                            if !address.is_empty() {
                                tracing::info!("Waitlist signup: {}", address);
                                email.set(String::new());
                                joined.set(true);
                            }
                        },
                        input {
                            class: "input input-bordered w-full sm:w-80",
                            r#type: "email",
                            placeholder: "your@email.com",
                            value: "{email}",
                            oninput: move |event| email.set(event.value()),
                        }
                        button { class: "btn btn-primary", r#type: "submit",
                            "Join Waitlist"
                            Icon { width: 16, height: 16, fill: "white", icon: FaArrowRight }
                        }
                    }
                }
            }
        }
    )
}
