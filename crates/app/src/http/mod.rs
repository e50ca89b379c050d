//! HTTP access to the claims API.

mod client;
mod errors;
pub mod middleware;
mod request;
mod response;
mod transport;

pub use client::*;
pub use errors::*;
pub use request::*;
pub use response::*;
pub use transport::*;
