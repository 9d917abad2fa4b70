//! Data Transfer Objects for form submissions, query strings, and the JSON
//! delete endpoint.

pub mod entry_dto;

pub use entry_dto::*;
