//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted PHC storage format)
//! - Cookie management
//! - One-shot flash messages carried in a cookie

pub mod cookie;
pub mod flash;
pub mod password;
