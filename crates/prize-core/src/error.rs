//! # Error Types
//!
//! Domain-specific error types for prize-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  prize-core errors (this file)                                         │
//! │  ├── CoreError        - Calculation could not produce a breakdown      │
//! │  └── ValidationError  - Input violates a precondition                  │
//! │                                                                         │
//! │  prize-cli errors (app)                                                │
//! │  ├── ConfigError      - Bad config file / environment                  │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Degenerate-but-computable inputs are NOT errors. They are reported as
//! [`DegenerateInputWarning`](crate::types::DegenerateInputWarning) inside the
//! breakdown.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Errors that stop a breakdown from being produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The organizer deduction removes more than the gross pool holds.
    ///
    /// ## When This Occurs
    /// ```text
    /// 1 player × 50 = 50 gross
    ///      │
    ///      ▼
    /// organizer deduction: 50 + 50 = 100
    ///      │
    ///      ▼
    /// DeductionsExceedPool { gross: 50.00, deductions: 100.00 }
    /// ```
    #[error("Deductions of {deductions} exceed the gross pool of {gross}")]
    DeductionsExceedPool { gross: Money, deductions: Money },

    /// `total_players × entry_fee` (or the organizer deduction) does not
    /// fit in the money representation.
    #[error("Prize pool of {total_players} players at {entry_fee} each is too large to calculate")]
    PoolOverflow { entry_fee: Money, total_players: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are raised before any pool arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Numeric value is below its minimum.
    #[error("{field} must be at least {min}")]
    TooSmall { field: String, min: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., "abc" typed into a number field).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Fixed tier percentages do not account for exactly 100% of the pool.
    ///
    /// The weighted total counts each tier once per paid player:
    /// `first + second + 2 × third + 4 × fifth`.
    #[error("tier percentages must weight to 100, got {weighted_total}")]
    TierWeighting { weighted_total: u64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
