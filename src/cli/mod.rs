//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};

/// medadmin - medication administration records
#[derive(Parser, Debug)]
#[command(name = "medadmin")]
#[command(version, about, long_about = None)]
#[command(author = "medadmin Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "medadmin.toml", env = "MEDADMIN_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MEDADMIN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Create the administrations table and its indexes
    Migrate(commands::migrate::MigrateArgs),

    /// Schedule a new administration
    Schedule(commands::schedule::ScheduleArgs),

    /// Record that a scheduled dose was given
    Record(commands::record::RecordArgs),

    /// Change the status of an administration
    SetStatus(commands::set_status::SetStatusArgs),

    /// Mark an administration as missed
    Miss(commands::miss::MissArgs),

    /// Show one administration
    Show(commands::show::ShowArgs),

    /// List administrations by patient, prescription or date
    List(commands::list::ListArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["medadmin", "--config", "ward.toml", "validate-config"]);
        assert_eq!(cli.config, "ward.toml");
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["medadmin", "--log-level", "debug", "migrate"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Migrate(_)));
    }

    #[test]
    fn test_cli_parse_schedule() {
        let cli = Cli::parse_from([
            "medadmin",
            "schedule",
            "--patient-id",
            "P1",
            "--prescription-id",
            "Rx1",
            "--dosage",
            "500",
            "--unit",
            "mg",
        ]);
        match cli.command {
            Commands::Schedule(args) => {
                assert_eq!(args.patient_id, "P1");
                assert_eq!(args.dosage, Some(500.0));
                assert!(args.scheduled_time.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_blank_identifier() {
        let result = Cli::try_parse_from(["medadmin", "show", "--id", "  "]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_non_positive_dosage() {
        for dosage in ["0", "-5", "NaN", "abc"] {
            let result = Cli::try_parse_from([
                "medadmin",
                "record",
                "--id",
                "a-1",
                "--administered-by",
                "Nurse Johnson",
                "--dosage",
                dosage,
            ]);
            assert!(result.is_err(), "accepted dosage {dosage}");
        }
    }

    #[test]
    fn test_cli_parse_set_status() {
        let cli = Cli::parse_from(["medadmin", "set-status", "--id", "a-1", "--status", "in_progress"]);
        match cli.command {
            Commands::SetStatus(args) => {
                assert_eq!(args.status, crate::domain::AdministrationStatus::InProgress)
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_list_requires_one_filter() {
        assert!(Cli::try_parse_from(["medadmin", "list"]).is_err());
        assert!(Cli::try_parse_from([
            "medadmin",
            "list",
            "--patient-id",
            "P1",
            "--date",
            "2024-03-01"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["medadmin", "list", "--date", "2024-03-01"]).is_ok());
    }
}
