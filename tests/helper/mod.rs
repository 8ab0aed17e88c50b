#![allow(dead_code)]

pub mod modules;
pub mod registry;
