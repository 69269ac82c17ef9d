//! HTTP middleware and extractors

pub mod json_body;

pub use json_body::ApiJson;
