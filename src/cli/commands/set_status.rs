//! Set-status command implementation

use crate::domain::ids::AdministrationId;
use crate::domain::AdministrationStatus;
use clap::Args;

use super::{open_service, parse_non_blank, print_administration, report_failure};

/// Arguments for the set-status command
#[derive(Args, Debug)]
pub struct SetStatusArgs {
    /// Administration identifier
    #[arg(long, value_parser = parse_non_blank)]
    pub id: String,

    /// Target status (SCHEDULED, IN_PROGRESS, COMPLETED, MISSED, CANCELLED, DELAYED)
    #[arg(long)]
    pub status: AdministrationStatus,
}

impl SetStatusArgs {
    /// Execute the set-status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let service = match open_service(config_path).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let id = AdministrationId::new(self.id.clone());
        match service.update_administration_status(&id, self.status).await {
            Ok(administration) => print_administration(&administration),
            Err(e) => Ok(report_failure("Failed to update status", &e)),
        }
    }
}
