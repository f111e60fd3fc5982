//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt)
//! - Signed access tokens (HS256 JWT)
//! - Bearer token extraction from request headers

pub mod bearer;
pub mod password;
pub mod token;
