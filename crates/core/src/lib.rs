//! Functional core for weathercache.
//!
//! Pure types, traits and functions shared by the server crate. Nothing in
//! here performs I/O: the Redis client and the HTTP client live in the
//! `weathercache` crate and plug into the traits defined here.

pub mod cache;
pub mod weather;
