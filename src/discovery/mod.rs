//! Add-on module discovery
//!
//! Locates installed packages whose manifest declares a capability keyword,
//! searching an application root and a user configuration root.
//!
//! # Modules
//!
//! - [`resolver`]: Traversal and last-root-wins merge
//! - [`fs`]: Directory listing and manifest reading behind a trait
//! - [`manifest`]: Typed package manifest
//! - [`error`]: Error types

pub mod error;
pub mod fs;
pub mod manifest;
pub mod resolver;

pub use fs::{LocalFs, ModuleFs};
pub use manifest::Manifest;
pub use resolver::{ModuleDescriptor, discover_modules};
