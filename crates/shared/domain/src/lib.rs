//! # Domain Models
//!
//! This crate contains pure enumeration data types with a single dependency (`serde`).
//! Keep it lean: no I/O, locking, or registry logic, just data and simple helpers.

pub mod catalog;
pub mod config;
pub mod declaration;
pub mod scalar;

pub use declaration::Declaration;
pub use scalar::Scalar;
