//! Pallet
//!
//! Pallet is the cart-pricing engine behind a wholesale registration workflow: a
//! pure, synchronous evaluator that maps a cart snapshot (buyer tags plus line
//! items) to per-line percentage price decreases for approved wholesale buyers.
//!
//! The engine holds no state, performs no I/O, and never fails for a
//! well-formed cart: ineligible buyers and under-threshold lines simply produce
//! no operations. The discount tiers live in a [`tiers::TierSchedule`] that is
//! validated once and bound to a [`policy::WholesalePolicy`] at construction,
//! so alternate tables can be substituted without touching evaluation logic.

pub mod carts;
pub mod discounts;
pub mod operations;
pub mod policy;
pub mod prelude;
pub mod tags;
pub mod tiers;
