//! Response formats of the Knora API v1 resource endpoints.
//!
//! Each response type corresponds to one `GET` endpoint variant and extends
//! the shared [`basic::BasicResponse`] envelope. Deserializing a conforming
//! payload is lossless: optional fields stay absent-vs-present through a
//! round trip.

pub mod basic;
pub mod error;
pub mod ontology;
pub mod resource;
pub mod search;
