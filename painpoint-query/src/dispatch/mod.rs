//! Per-platform search dispatch: query building, URL construction, and
//! opening each URL through a [`search::TabOpener`].

pub mod query;
pub mod search;
