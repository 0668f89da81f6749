//! Headless command-line interface to the backend.
//!
//! Staff-facing commands for listing inventory and managing submitted
//! requests without entering the TUI.

pub mod inventory;
pub mod requests;

pub use inventory::InventoryArgs;
pub use requests::RequestsArgs;
