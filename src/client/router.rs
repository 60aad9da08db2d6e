use dioxus::prelude::*;

use crate::client::{
    components::SiteLayout,
    routes::{Auth, Forum, Game, Landing, NewTopic, NotFound, TopicPage},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]

    #[route("/")]
    Landing {},

    #[route("/game")]
    Game {},

    #[route("/forum")]
    Forum {},

    #[route("/forum/new")]
    NewTopic {},

    #[route("/forum/topic/:topic_id")]
    TopicPage { topic_id: String },

    #[end_layout]

    #[route("/auth?:signup")]
    Auth { signup: bool },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
