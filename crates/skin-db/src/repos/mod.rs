//! Repository modules implementing storage operations for skinsense entities.
//!
//! Each module adds methods to `SkinService` via `impl SkinService` blocks.

pub mod cart;
pub mod community;
pub mod products;
pub mod progress;
pub mod questions;
pub mod quiz;
