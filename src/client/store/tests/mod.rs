mod resolve_profile;
mod session_events;
