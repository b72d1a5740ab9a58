//! Kernel utilities shared by the CLI and embedding applications.
//! Keep this crate lightweight; it loads layered configuration and declaration catalogs.
//!
//! ## Config loading
//! ```rust,no_run
//! use ordum_kernel::config::load_config;
//! use ordum_kernel::domain::config::OrdumConfig;
//!
//! let cfg: OrdumConfig = load_config(Some("ordum.toml")).unwrap_or_default();
//! assert!(!cfg.logging.level.is_empty());
//! ```
//!
//! ## Catalogs
//! ```rust,no_run
//! use ordum_kernel::catalog::load_catalog;
//! use ordum_registry::Registry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Registry::new();
//! let declared = load_catalog("cards.toml")?.declare_into(&registry)?;
//! println!("{declared} enumerations declared");
//! # Ok(())
//! # }
//! ```
pub mod catalog;
pub mod config;

pub use ordum_domain as domain;
