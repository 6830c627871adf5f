//! Record command implementation

use crate::domain::ids::AdministrationId;
use chrono::{DateTime, Utc};
use clap::Args;

use super::{open_service, parse_dosage, parse_non_blank, parse_timestamp, print_administration, report_failure};

/// Arguments for the record command
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Administration identifier
    #[arg(long, value_parser = parse_non_blank)]
    pub id: String,

    /// When the dose was given (RFC 3339, default now)
    #[arg(long, value_parser = parse_timestamp)]
    pub actual_time: Option<DateTime<Utc>>,

    /// Person who gave the dose
    #[arg(long, value_parser = parse_non_blank)]
    pub administered_by: String,

    /// Dosage actually given; keeps the planned dosage when omitted
    #[arg(long, value_parser = parse_dosage)]
    pub dosage: Option<f64>,

    /// Notes; keeps the existing notes when omitted
    #[arg(long)]
    pub notes: Option<String>,
}

impl RecordArgs {
    /// Execute the record command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let service = match open_service(config_path).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let result = service
            .record_administration(
                &AdministrationId::new(self.id.clone()),
                self.actual_time.unwrap_or_else(Utc::now),
                self.administered_by.clone(),
                self.dosage,
                self.notes.clone(),
            )
            .await;

        match result {
            Ok(administration) => print_administration(&administration),
            Err(e) => Ok(report_failure("Failed to record administration", &e)),
        }
    }
}
