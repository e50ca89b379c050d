//! Claims

mod errors;
mod service;

pub use errors::ClaimsServiceError;
pub use service::*;
