//! foreman-api: Shared Foreman API wire types
//!
//! Request and response types for the Foreman REST API (`/api/v2`), used by
//! the client library and the CLI.

pub mod requests;
pub mod responses;
