//! API client, session lifecycle and resource services for the claims portal.

pub mod context;
pub mod domain;
pub mod health;
pub mod http;
pub mod session;
