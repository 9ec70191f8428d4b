//! Core library exports for the advertisements listing service.
//!
//! This crate exposes the domain model, persistence, service and DTO layers
//! behind the public read API for paid advertisement listings, plus the
//! Actix-web routes when the `server` feature is enabled.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;
