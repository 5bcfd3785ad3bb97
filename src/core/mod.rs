//! Core domain logic for the NexGen AI Tech site

#[cfg(feature = "ssr")]
pub mod config;

pub mod tracking;
