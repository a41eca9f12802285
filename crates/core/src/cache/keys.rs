/// Logical resource name for the cached upstream weather payload.
pub const WEATHER_DATA_RESOURCE: &str = "weatherData";

/// Returns the cache key holding the weather payload for a server instance.
///
/// Each running instance owns exactly one key, prefixed with its server
/// number so that instances sharing a Redis never read each other's data.
///
/// # Examples
///
/// ```
/// use weathercache_core::cache::weather_data_key;
///
/// assert_eq!(weather_data_key("2"), "server2:weatherData");
/// ```
pub fn weather_data_key(server_number: &str) -> String {
    format!("server{}:{}", server_number, WEATHER_DATA_RESOURCE)
}
