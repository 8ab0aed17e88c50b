//! Registry implementations of the version source traits

pub mod npm;

pub use npm::NpmRegistry;
