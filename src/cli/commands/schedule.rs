//! Schedule command implementation

use crate::domain::ids::{PatientId, PrescriptionId};
use crate::domain::NewAdministration;
use chrono::{DateTime, Utc};
use clap::Args;

use super::{open_service, parse_dosage, parse_non_blank, parse_timestamp, print_administration, report_failure};

/// Arguments for the schedule command
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Patient receiving the dose
    #[arg(long, value_parser = parse_non_blank)]
    pub patient_id: String,

    /// Prescription the dose belongs to
    #[arg(long, value_parser = parse_non_blank)]
    pub prescription_id: String,

    /// When the dose is due (RFC 3339, default now)
    #[arg(long, value_parser = parse_timestamp)]
    pub scheduled_time: Option<DateTime<Utc>>,

    /// Planned dosage
    #[arg(long, value_parser = parse_dosage)]
    pub dosage: Option<f64>,

    /// Dosage unit (e.g. mg)
    #[arg(long, value_parser = parse_non_blank)]
    pub unit: String,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl ScheduleArgs {
    /// Execute the schedule command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let service = match open_service(config_path).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let new = NewAdministration {
            patient_id: PatientId::new(self.patient_id.clone()),
            prescription_id: PrescriptionId::new(self.prescription_id.clone()),
            scheduled_time: self.scheduled_time.unwrap_or_else(Utc::now),
            dosage_given: self.dosage,
            unit: self.unit.clone(),
            notes: self.notes.clone(),
        };

        match service.create_administration(new).await {
            Ok(administration) => print_administration(&administration),
            Err(e) => Ok(report_failure("Failed to schedule administration", &e)),
        }
    }
}
