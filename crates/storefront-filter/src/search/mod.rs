//! Search module.
//!
//! Turns filter state into product query clauses, both as SQL for the
//! hosted database and as an in-memory predicate.

mod filter;
mod query;

pub use filter::Filter;
pub use query::ProductQuery;
