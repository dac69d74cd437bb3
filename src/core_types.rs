//! Core types used throughout the system
//!
//! These are fundamental aliases and limits shared by all modules.

/// Element type for every sequence the laboratory operates on.
///
/// Signed 64-bit so that user-supplied ranges like `[-1_000_000, 1_000_000]`
/// and widened no-duplicate pools never overflow in practice.
pub type Value = i64;

/// Hard ceiling on generated element counts.
///
/// Size modes like N*N explode quickly; anything above this is silently
/// capped rather than rejected.
pub const MAX_ELEMENTS: usize = 5_000_000;
