//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Raised when a parameter is missing, non-numeric, or violates its
    /// constraint.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        /// Name of the offending field, or `line N` for structural errors.
        field: String,
        /// Human-readable description of the violation.
        reason: String,
    },
    /// Raised when the branch impedance magnitude is indistinguishable from
    /// series resonance and the current solution would diverge.
    #[error("filter impedance magnitude {magnitude_ohm:.3e} ohm is at series resonance")]
    ResonanceSingularity {
        /// The offending |Z_filter| in ohms.
        magnitude_ohm: Scalar,
    },
    /// Raised when parameter-file bytes are not text under UTF-8 or Latin-1.
    #[error("parameter file is not decodable as UTF-8 or Latin-1 text")]
    Decoding,
    /// Wraps file read/write failures.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Wraps JSON serialization failures.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
    /// Wraps workbook serialization failures.
    #[error("workbook export failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

impl FilterError {
    /// Convenience constructor for constraint violations.
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
