#![deny(unsafe_code)]

pub mod registry;

pub use crate::registry::{has_specific_record, lookup, records};
