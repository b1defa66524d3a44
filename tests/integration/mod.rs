//! Integration tests for true-cost
//!
//! These tests go through the public API only and exercise real
//! calculations, forms, reports and configuration files.

pub mod calculator_properties_tests;
pub mod config_tests;
pub mod form_tests;
pub mod report_tests;
