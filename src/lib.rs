//! Terminal client for a food-bank pickup request service.
//!
//! Clients browse the available inventory, pick items and quantities,
//! schedule a pickup, and receive a confirmation number through a
//! three-step wizard. Staff subcommands list inventory and manage
//! submitted requests over the same REST backend.

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
pub mod tui;
