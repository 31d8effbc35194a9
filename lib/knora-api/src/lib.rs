//! Typed views of the JSON payloads returned by the Knora API.
//!
//! The models describe the wire shapes only; issuing the HTTP requests,
//! authentication and caching are left to the consumer.

pub mod v1;
