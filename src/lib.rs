mod script;

pub use tropo_webapi_types as types;
pub use script::{CompactJsonEncoder, Config, ConfigBuilder, ConfigError, Encoder, JsonEncoder, Tropo};
pub use types::Error;
