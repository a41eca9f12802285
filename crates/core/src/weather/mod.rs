mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{Result, WeatherError};
pub use http_mapping::weather_error_to_status_code;
pub use traits::WeatherFetcher;
pub use types::{temperature_from_payload, Reading, WeatherQuery, TEMPERATURE_FIELD};
