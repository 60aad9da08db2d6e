pub mod auth;
pub mod forum;
pub mod game;
pub mod landing;
pub mod not_found;

pub use auth::Auth;
pub use forum::{Forum, NewTopic, TopicPage};
pub use game::Game;
pub use landing::Landing;
pub use not_found::NotFound;
