//! Trust Bank Types - Shared domain types
//!
//! This crate contains domain types used across Trust Bank services:
//! - User identity and roles
//! - Account numbers and tiers
//! - Session token identifiers
//! - The API response envelope

pub mod account;
pub mod api;
pub mod session;
pub mod user;

pub use account::*;
pub use api::*;
pub use session::*;
pub use user::*;
