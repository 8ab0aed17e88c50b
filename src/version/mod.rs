//! Update advisory layer
//!
//! Decides whether a running version should be told about a published one,
//! and which of the "latest" and "beta" dist-tags to propose.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registries │────▶│   Checker   │────▶│  Selector   │
//! │   (fetch)   │     │ (orchestr.) │     │ (two tags)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │ Eligibility │────▶│   Semver    │
//!                     │   (rule)    │     │ (compare)   │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`semver`]: Parsing and precedence comparison
//! - [`eligibility`]: Whether a single candidate is an acceptable upgrade
//! - [`selector`]: Picks between the "latest" and "beta" candidates
//! - [`checker`]: Async entry points driving an injected source
//! - [`registry`]: Source traits the checker depends on
//! - [`registries`]: npm implementation of the source traits
//! - [`types`]: Source payloads
//! - [`error`]: Error types

pub mod checker;
pub mod eligibility;
pub mod error;
pub mod registries;
pub mod registry;
pub mod selector;
pub mod semver;
pub mod types;
