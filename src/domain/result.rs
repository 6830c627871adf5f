//! Result type alias for medadmin

use super::errors::MedAdminError;

/// Result type alias for medadmin operations
///
/// # Examples
///
/// ```
/// use medadmin::domain::result::Result;
/// use medadmin::domain::errors::MedAdminError;
///
/// fn failing_function() -> Result<()> {
///     Err(MedAdminError::Validation("dosage must be positive".to_string()))
/// }
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, MedAdminError>;
