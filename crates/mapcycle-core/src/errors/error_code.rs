//! MapcycleErrorCode trait for the presentation boundary.

/// Stable, machine-readable error codes for whatever renders the rotation.
/// Every error enum implements this.
pub trait MapcycleErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DISTRIBUTION_ERROR: &str = "DISTRIBUTION_ERROR";
