//! Cache access for the weather endpoint.
//!
//! [`CacheGateway`] is the only type request handling talks to. It wraps a
//! backend implementing `weathercache_core::cache::Cache` (Redis in
//! production) and turns every backend failure into "no cache".

mod gateway;
pub mod redis_impl;

#[cfg(test)]
pub mod testing;

pub use gateway::CacheGateway;
pub use redis_impl::RedisCache;
