//! Core library exports for the catalog administration service.
//!
//! This crate exposes the category aggregate and its validation handlers,
//! the persistence gateway with its Diesel implementation, and the use
//! cases that tie them together.

#[cfg(feature = "data")]
pub mod commands;
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
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;
