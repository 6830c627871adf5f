//! Administration status and lifecycle transitions
//!
//! The lifecycle is described by an explicit transition table
//! ([`AdministrationStatus::allowed_transitions`]). Whether the table is
//! enforced is decided by a [`TransitionPolicy`]; the default policy accepts
//! any target status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a medication administration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdministrationStatus {
    /// Dose is due; initial state of every administration
    Scheduled,
    /// Administration has started but is not finished
    InProgress,
    /// Dose was given
    Completed,
    /// Dose was not given in its window
    Missed,
    /// Administration was called off
    Cancelled,
    /// Administration is postponed
    Delayed,
}

impl AdministrationStatus {
    /// Every status, in declaration order
    pub const ALL: [AdministrationStatus; 6] = [
        AdministrationStatus::Scheduled,
        AdministrationStatus::InProgress,
        AdministrationStatus::Completed,
        AdministrationStatus::Missed,
        AdministrationStatus::Cancelled,
        AdministrationStatus::Delayed,
    ];

    /// Returns the stored name of the status (e.g. `IN_PROGRESS`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Missed => "MISSED",
            Self::Cancelled => "CANCELLED",
            Self::Delayed => "DELAYED",
        }
    }

    /// Statuses reachable from this one in the lifecycle
    pub fn allowed_transitions(&self) -> &'static [AdministrationStatus] {
        use AdministrationStatus::*;
        match self {
            Scheduled => &[InProgress, Completed, Missed, Cancelled, Delayed],
            Delayed => &[InProgress, Completed, Missed, Cancelled],
            InProgress => &[Completed, Cancelled],
            Completed | Missed | Cancelled => &[],
        }
    }

    /// Returns true if the status has no outgoing transitions
    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Checks a transition against the lifecycle table
    ///
    /// Staying in a non-terminal status counts as a valid transition.
    pub fn can_transition_to(&self, target: AdministrationStatus) -> bool {
        if *self == target {
            return !self.is_terminal();
        }
        self.allowed_transitions().contains(&target)
    }
}

impl fmt::Display for AdministrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdministrationStatus {
    type Err = String;

    /// Parses a stored status name; matching ignores case and accepts `-` for `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Invalid administration status '{}'. Must be one of: {}",
                    s,
                    Self::ALL
                        .iter()
                        .map(|status| status.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

/// How status changes are checked against the lifecycle table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Any target status is accepted
    #[default]
    Permissive,
    /// Only transitions listed in the lifecycle table are accepted
    Strict,
}

impl TransitionPolicy {
    /// Returns true if the policy lets `from` move to `to`
    pub fn permits(&self, from: AdministrationStatus, to: AdministrationStatus) -> bool {
        match self {
            Self::Permissive => true,
            Self::Strict => from.can_transition_to(to),
        }
    }
}
