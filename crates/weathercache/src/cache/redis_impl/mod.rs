//! Redis cache backend implementation.
//!
//! Plain `GET` / `SETEX` over a connection manager. The manager multiplexes
//! one TCP connection across all request handlers.

mod cache;
mod error;

pub use cache::RedisCache;
