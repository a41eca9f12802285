//! Weather readings: the upstream client and its read-through cache.

mod cached;
mod open_meteo;

#[cfg(test)]
pub mod testing;

pub use cached::CachedWeatherFetcher;
pub use open_meteo::OpenMeteoFetcher;
