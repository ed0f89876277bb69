//! Authentication
//!
//! Bearer token validation for the admin API.

pub mod token;

pub use token::auth_middleware;
