//! Session persistence and lifecycle.

mod controller;
mod errors;
mod file;
mod memory;
mod models;
mod store;

pub use controller::*;
pub use errors::*;
pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
pub use models::*;
pub use store::*;
