//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod auth_service;
pub mod contact_service;
pub mod portfolio_service;

pub use auth_service::{
    decode_token, hash_password, mint_token, verify_password, AuthService, Claims,
};
pub use contact_service::ContactService;
pub use portfolio_service::PortfolioService;
