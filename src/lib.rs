//! Payroll Rate Resolution Engine and Leave Accrual Ledger
//!
//! This crate provides the payroll core for a fire/EMS department worksheet
//! editor: resolving imported time entries to dollar amounts via a rate
//! matrix, and maintaining paid-time-off balances against an append-only
//! transaction ledger.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
