//! Route modules for Extracto Server

pub mod extract;
pub mod health;
