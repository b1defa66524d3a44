//! Core functionality for the calculator
//!
//! This module contains the cost calculation, the editable form state and
//! the report built from a calculation.

pub mod cost; // Rate tables and cost calculation
pub mod form;
pub mod report;

pub use form::CalculatorForm;
pub use report::{CostReport, ReportLine, ReportSection, SavingsSummary};
