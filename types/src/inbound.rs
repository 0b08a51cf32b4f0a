mod result;
mod session;

pub use result::{ActionOutcome, InboundResult};
pub use session::{Endpoint, InboundSession};

use serde_json::{Map, Value};

use crate::Error;

/// Takes the mapping stored under `key` out of a decoded document.
fn take_object(document: &mut Value, key: &'static str) -> Result<Map<String, Value>, Error> {
    let value = document
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| Error::missing(key))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::UnsupportedShape {
            field: key,
            expected: "a mapping",
        }),
    }
}
