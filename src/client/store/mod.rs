//! Process-wide authentication state.
//!
//! The store is the single writer of the session/profile triple: views read
//! it through [`use_auth`] and never mutate it directly. Session transitions
//! enter through [`session::AuthState::apply`], and profile resolution
//! results re-enter through [`session::AuthState::commit_profile`], which
//! discards results from superseded transitions.

pub mod auth;
pub mod resolve;
pub mod session;

#[cfg(test)]
mod tests;

pub use auth::{use_auth, AuthProvider, AuthStore};
