//! # skin-core
//!
//! Core types and pure logic for SkinSense.
//!
//! This crate provides the foundational types shared across all SkinSense crates:
//! - Entity structs for quiz questions, options, answers, products, progress and carts
//! - Closed enums for skin types, routine categories and cart actions
//! - Quiz scoring (answer aggregation) and the explicit `QuizSession` value
//! - Routine generation from a skin type and the product catalog
//! - Progress statistics and cart totals
//! - Cross-cutting error types
//! - CLI response types
//!
//! Nothing in here performs I/O. Persistence lives in `skin-db`.

pub mod cart;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod progress;
pub mod quiz;
pub mod responses;
pub mod routine;
