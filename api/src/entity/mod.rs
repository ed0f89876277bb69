//! SeaORM table models
//!
//! Persistence-layer models, one module per table. Domain conversions live
//! in the postgres adapters, not here.

pub mod contact_messages;
pub mod projects;
pub mod skills;
pub mod testimonials;
pub mod users;
