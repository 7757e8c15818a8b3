//! # Domain Models
//!
//! Plain data passed between the glzig stages: what the user selected, what the resolver
//! produced and how the tool is configured. Keep it lean: no I/O and no registry parsing here.

pub mod config;
pub mod features;
pub mod selection;
