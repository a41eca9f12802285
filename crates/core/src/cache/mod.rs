mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{weather_data_key, WEATHER_DATA_RESOURCE};
pub use serialization::{deserialize_reading, serialize_reading};
pub use traits::Cache;
