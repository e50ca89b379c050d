//! Claims API resources.

pub mod claims;
pub mod documents;
