//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod alerts;
pub mod donors;
pub mod footer;
pub mod info_card;
pub mod logs;
pub mod requests;
pub mod spinner;
pub mod stats;
pub mod stock;
