//! # prize-core: Pure Prize Pool Logic
//!
//! This crate is the **heart** of the prize calculator. It turns tournament
//! results into prize money as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Prize Calculator Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Front-ends (web form, prize-cli)                         │   │
//! │  │    raw text ──► typed TournamentInput ──► rendered lines       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ compute_breakdown                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ prize-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌──────────────┐  ┌─────────┐  │   │
//! │  │   │   types   │  │   pool    │  │ distribution │  │  money  │  │   │
//! │  │   │  Input    │  │  gross →  │  │  EqualSplit  │  │  Money  │  │   │
//! │  │   │ Breakdown │  │  net      │  │  FixedTiers  │  │  Share  │  │   │
//! │  │   └───────────┘  └───────────┘  └──────────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Input, payout modes and the breakdown
//! - [`money`] - Money type with integer arithmetic
//! - [`pool`] - Gross pool to net pool
//! - [`distribution`] - Equal split and fixed percentage tiers
//! - [`calculator`] - `compute_breakdown`, the one public operation
//! - [`validation`] - Input preconditions
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output
//! 2. **Integer Money**: amounts are minor units (i64), shares are basis points
//! 3. **Explicit Errors**: invalid input is a typed error, odd-but-valid input
//!    is a warning in the result
//!
//! ## Example Usage
//!
//! ```rust
//! use prize_core::{compute_breakdown, EqualSplitRules, Money, PayoutMode, TournamentInput};
//!
//! let input = TournamentInput {
//!     total_players: 20,
//!     entry_fee: Money::from_whole_units(50),
//!     is_friday_event: true,
//!     organizer_compensation: true,
//!     payout_mode: PayoutMode::EqualSplit(EqualSplitRules {
//!         prized_player_count: 5,
//!         undefeated_bonus: true,
//!     }),
//! };
//!
//! let breakdown = compute_breakdown(&input).unwrap();
//! assert_eq!(breakdown.net_pool, Money::from_whole_units(810));
//! assert_eq!(breakdown.accounted_total(), breakdown.gross_pool);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod distribution;
pub mod error;
pub mod money;
pub mod pool;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::compute_breakdown;
pub use distribution::rebalance_from_first_place;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat fee the organizer keeps on top of their own entry fee.
///
/// ## Business Reason
/// The organizer plays for free and is paid for running the event, so the
/// pool loses `entry_fee + ORGANIZER_FLAT_FEE`. Only the flat fee is shown
/// as the organizer's compensation.
pub const ORGANIZER_FLAT_FEE: Money = Money::from_whole_units(50);

/// Part of a Friday pool reserved for a bigger tournament.
pub const FRIDAY_CONTRIBUTION_SHARE: Share = Share::from_percent(10);

/// Entry fee front-ends pre-fill.
pub const DEFAULT_ENTRY_FEE: Money = Money::from_whole_units(50);
