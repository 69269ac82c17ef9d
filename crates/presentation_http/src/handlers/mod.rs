//! HTTP request handlers

pub mod footprint;
pub mod games;
pub mod health;
pub mod ping;
pub mod users;
