//! Inventory commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::ApiClient;
use crate::models::CatalogItem;

/// Inspect available inventory
#[derive(Debug, Clone, Args)]
pub struct InventoryArgs {
    /// Inventory subcommand
    #[command(subcommand)]
    pub command: InventoryCommand,
}

/// Inventory subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum InventoryCommand {
    /// List all available items
    List(ListInventoryArgs),
}

/// List all available items
#[derive(Debug, Clone, Args)]
pub struct ListInventoryArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListInventoryResponse {
    items: Vec<CatalogItem>,
    count: usize,
}

impl InventoryArgs {
    /// Execute the inventory command
    pub fn execute(&self, client: &ApiClient) -> Result<()> {
        match &self.command {
            InventoryCommand::List(args) => args.execute(client),
        }
    }
}

impl ListInventoryArgs {
    /// Execute the list command
    pub fn execute(&self, client: &ApiClient) -> Result<()> {
        let items = client.list_inventory()?;
        let response = ListInventoryResponse {
            count: items.len(),
            items,
        };

        if self.json {
            println!("{}", serde_json::to_string(&response)?);
        } else if response.count == 0 {
            println!("No items available.");
        } else {
            println!("Available items ({}):", response.count);
            println!();
            for item in &response.items {
                println!(
                    "  {:<12} {:<24} {:<8} {:>6} {}",
                    item.id, item.item_name, item.category, item.quantity, item.unit
                );
            }
        }

        Ok(())
    }
}
