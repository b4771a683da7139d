//! # chatzone-shared
//!
//! Types shared by the store and client crates: channel identifiers, the
//! logged-in identity record and its form payloads, the mention tokenizer
//! and the route table used by the view layer.

pub mod constants;
pub mod error;
pub mod identity;
pub mod mention;
pub mod routes;
pub mod types;
