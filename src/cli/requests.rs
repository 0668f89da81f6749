//! Request management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::ApiClient;
use crate::constants::location_name;
use crate::models::{FoodRequest, RequestStatus};

/// Inspect and update submitted requests
#[derive(Debug, Clone, Args)]
pub struct RequestsArgs {
    /// Requests subcommand
    #[command(subcommand)]
    pub command: RequestsCommand,
}

/// Request management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum RequestsCommand {
    /// List all submitted requests
    List(ListRequestsArgs),
    /// Update the status of a request
    Update(UpdateRequestArgs),
}

/// List all submitted requests
#[derive(Debug, Clone, Args)]
pub struct ListRequestsArgs {
    /// Only show requests with this status (pending, completed, cancelled)
    #[arg(long, value_name = "STATUS")]
    pub status: Option<RequestStatus>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Update the status of a request
#[derive(Debug, Clone, Args)]
pub struct UpdateRequestArgs {
    /// Request identifier
    #[arg(value_name = "ID")]
    pub id: String,

    /// New status (pending, completed, cancelled)
    #[arg(long, value_name = "STATUS")]
    pub status: RequestStatus,
}

#[derive(Debug, Serialize)]
struct ListRequestsResponse {
    requests: Vec<FoodRequest>,
    count: usize,
}

impl RequestsArgs {
    /// Execute the requests command
    pub fn execute(&self, client: &ApiClient) -> Result<()> {
        match &self.command {
            RequestsCommand::List(args) => args.execute(client),
            RequestsCommand::Update(args) => args.execute(client),
        }
    }
}

impl ListRequestsArgs {
    /// Execute the list command
    pub fn execute(&self, client: &ApiClient) -> Result<()> {
        let mut requests = client.list_requests()?;
        if let Some(status) = self.status {
            requests.retain(|r| r.status == status);
        }
        // Newest first
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let response = ListRequestsResponse {
            count: requests.len(),
            requests,
        };

        if self.json {
            println!("{}", serde_json::to_string(&response)?);
        } else if response.count == 0 {
            println!("No requests found.");
        } else {
            println!("Requests ({}):", response.count);
            println!();
            for request in &response.requests {
                let location =
                    location_name(&request.location_id).unwrap_or(request.location_id.as_str());
                println!(
                    "  {:<12} {:<12} {:<10} {:<12} {:<20} {} item(s)",
                    request.id,
                    request.confirmation_number,
                    request.status,
                    request.pickup_date,
                    location,
                    request.items.len()
                );
            }
        }

        Ok(())
    }
}

impl UpdateRequestArgs {
    /// Execute the update command
    pub fn execute(&self, client: &ApiClient) -> Result<()> {
        let updated = client.update_request_status(&self.id, self.status)?;
        println!(
            "Request {} ({}) is now {}.",
            updated.id, updated.confirmation_number, updated.status
        );
        Ok(())
    }
}
