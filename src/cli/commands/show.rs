//! Show command implementation

use crate::domain::ids::AdministrationId;
use clap::Args;

use super::{open_service, parse_non_blank, print_administration, report_failure};

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Administration identifier
    #[arg(long, value_parser = parse_non_blank)]
    pub id: String,
}

impl ShowArgs {
    /// Execute the show command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let service = match open_service(config_path).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let id = AdministrationId::new(self.id.clone());
        match service.get_administration(&id).await {
            Ok(administration) => print_administration(&administration),
            Err(e) => Ok(report_failure("Failed to load administration", &e)),
        }
    }
}
