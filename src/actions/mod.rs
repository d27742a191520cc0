//! Actions and the packs that declare them
//!
//! A [`pack::Pack`] is one parsed configuration file. The [`catalog::Catalog`] holds
//! every pack loaded for an invocation, in search-path order, and resolves names
//! against them with first-occurrence-wins semantics.

pub mod action;
pub mod catalog;
pub mod pack;
