//! List command implementation
//!
//! Exactly one of `--patient-id`, `--prescription-id` or `--date` selects the
//! access path. Results are in scheduled-time order.

use crate::domain::ids::{PatientId, PrescriptionId};
use chrono::NaiveDate;
use clap::{ArgGroup, Args};

use super::{open_service, parse_non_blank, print_json, report_failure};

/// Arguments for the list command
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("filter")
        .required(true)
        .args(["patient_id", "prescription_id", "date"]),
))]
pub struct ListArgs {
    /// Administrations of one patient
    #[arg(long, value_parser = parse_non_blank)]
    pub patient_id: Option<String>,

    /// Administrations of one prescription
    #[arg(long, value_parser = parse_non_blank)]
    pub prescription_id: Option<String>,

    /// Administrations scheduled on a UTC date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let service = match open_service(config_path).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let result = if let Some(ref patient_id) = self.patient_id {
            service
                .get_patient_administrations(&PatientId::new(patient_id.clone()))
                .await
        } else if let Some(ref prescription_id) = self.prescription_id {
            service
                .get_prescription_administrations(&PrescriptionId::new(prescription_id.clone()))
                .await
        } else if let Some(date) = self.date {
            service.get_daily_administrations(date).await
        } else {
            println!("❌ One of --patient-id, --prescription-id or --date is required");
            return Ok(3);
        };

        match result {
            Ok(administrations) => {
                tracing::debug!(count = administrations.len(), "Listed administrations");
                print_json(&administrations)?;
                Ok(0)
            }
            Err(e) => Ok(report_failure("Failed to list administrations", &e)),
        }
    }
}
