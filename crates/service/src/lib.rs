//! Service layer for the consulting backend.
//! - `store`: document store seam and its backends.
//! - `seed`: one-shot population of the reference collections.
//! - `catalog` / `submissions`: the read and write operations behind the HTTP routes.

pub mod errors;
pub mod store;
pub mod seed;
pub mod catalog;
pub mod submissions;
