//! Siniestros
//!
//! Domain model for the siniestros (insurance claims) client: session state, route guards,
//! claims, documents and the listing helpers shared by every view.

pub mod claims;
pub mod dates;
pub mod documents;
pub mod guards;
pub mod listing;
pub mod prelude;
pub mod routes;
pub mod session;
pub mod users;
pub mod validation;
