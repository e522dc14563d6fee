//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # geohook-entities
//!
//! Reusable, agnostic domain entities for geohook.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod field;
pub mod geo;
pub mod geocode;
pub mod id;
pub mod notification;
pub mod operation;
pub mod record;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
