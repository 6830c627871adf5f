//! Domain identifier types
//!
//! Newtype wrappers for the three identifiers the system handles. Each type is
//! a distinct wrapper around a `String`, so a [`PatientId`] can never be passed
//! where a [`PrescriptionId`] is expected. Externally supplied values are
//! wrapped verbatim; format validation belongs to the boundary layer.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a new random identifier (UUID v4)
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wraps an externally supplied identifier without validation
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes self and returns the inner String
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::new(s))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Patient identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use medadmin::domain::ids::PatientId;
    ///
    /// let patient_id = PatientId::new("patient-001");
    /// assert_eq!(patient_id.as_str(), "patient-001");
    /// ```
    PatientId
);

string_id!(
    /// Prescription identifier
    PrescriptionId
);

string_id!(
    /// Medication administration identifier
    ///
    /// Assigned once when the administration is created and never changed.
    AdministrationId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_produces_uuid() {
        let id = AdministrationId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_generate_is_unique() {
        let ids: HashSet<PatientId> = (0..1000).map(|_| PatientId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_new_wraps_verbatim() {
        // No validation at this layer, even for blank input
        assert_eq!(PrescriptionId::new("  ").as_str(), "  ");
        assert_eq!(PrescriptionId::new("rx#1").as_str(), "rx#1");
    }

    #[test]
    fn test_display_and_from_str() {
        let id: PatientId = "patient-42".parse().unwrap();
        assert_eq!(format!("{}", id), "patient-42");
        assert_eq!(PatientId::from("patient-42"), id);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = AdministrationId::new("admin-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"admin-1\"");
        let back: AdministrationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
