//! Kernel utilities shared across the glzig crates.
//! Keep this crate lightweight: configuration loading and version ordering, nothing stage specific.
//!
//! ## Version ordering
//! ```rust
//! # use glzig_kernel::version::compare_versions;
//! use std::cmp::Ordering;
//! assert_eq!(compare_versions("10.0", "9.1"), Ordering::Greater);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use glzig_kernel::config::load_config;
//! use glzig_kernel::domain::config::GeneratorConfig;
//! let cfg: GeneratorConfig = load_config(None::<&str>)?;
//! ```
pub mod config;
pub mod version;

pub use glzig_domain as domain;
