//! Request and response DTOs for the gateway endpoints.

pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
