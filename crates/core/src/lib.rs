//! Core business logic for DebtPath.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `repayment` - Debt repayment simulation engine

pub mod repayment;
