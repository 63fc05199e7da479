//! Combat arithmetic shared by every crawler variant.
//!
//! This module provides the pure functions behind damage and healing.
//! They are deterministic and side-effect free; [`CrawlerBase`](crate::CrawlerBase)
//! validates inputs and then calls them to compute the new health.
//!
//! # Core Functions
//!
//! - `mitigate_damage`: flat defence mitigation with a floor of [`MINIMUM_DAMAGE`]
//! - `apply_damage`: HP reduction (clamped to 0)
//! - `apply_heal`: HP restoration (clamped to max)

pub mod damage;

pub use damage::{MINIMUM_DAMAGE, apply_damage, apply_heal, mitigate_damage};
