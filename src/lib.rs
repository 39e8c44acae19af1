//! EnformionGO validating proxy library
//!
//! Exposes one HTTP endpoint per EnformionGO search kind, validates and
//! normalizes each request locally, forwards it to the upstream API and
//! passes the upstream JSON back unchanged.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types and their HTTP mapping.
//! - `handlers`: HTTP request handlers and shared state.
//! - `models`: Request shapes and their wire-name tables.
//! - `normalizer`: Projection of request shapes onto upstream payloads.
//! - `routes`: Router and middleware assembly.
//! - `search_kind`: Endpoint catalogue and search-type resolution.
//! - `upstream_client`: EnformionGO API client.
//! - `validation`: Cross-field criteria checks.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod routes;
pub mod search_kind;
pub mod upstream_client;
pub mod validation;
