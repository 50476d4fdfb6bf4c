//! API endpoint handlers.

pub mod compare;
pub mod extract;
pub mod health;
