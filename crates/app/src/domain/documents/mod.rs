//! Documents

mod errors;
mod service;

pub use errors::DocumentsServiceError;
pub use service::*;
