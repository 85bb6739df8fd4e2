//! Payroll Hours Classification Engine
//!
//! This crate converts chronological clock-in/clock-out punches into a
//! payroll-grade breakdown of worked time (ordinary, overtime, night
//! surcharge, and Sunday hours) and values the breakdown under Colombian
//! labor-law surcharge factors.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
