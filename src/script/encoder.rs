use serde::Serialize;
use serde::ser::Error as _;
use tropo_webapi_types::{Envelope, Error};

/// Turns an envelope into JSON text.
pub trait Encoder {
    fn encode(&self, envelope: &Envelope) -> Result<String, Error>;

    /// Indented output, or `None` when the encoder cannot produce it.
    fn encode_pretty(&self, envelope: &Envelope, indent: usize) -> Option<Result<String, Error>> {
        let _ = (envelope, indent);
        None
    }
}

/// `serde_json` backed encoder. Keys keep their declared order in both
/// compact and pretty output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode(&self, envelope: &Envelope) -> Result<String, Error> {
        Ok(serde_json::to_string(envelope)?)
    }

    fn encode_pretty(&self, envelope: &Envelope, indent: usize) -> Option<Result<String, Error>> {
        Some(to_string_indented(envelope, indent))
    }
}

/// Encoder that only knows compact output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactJsonEncoder;

impl Encoder for CompactJsonEncoder {
    fn encode(&self, envelope: &Envelope) -> Result<String, Error> {
        Ok(serde_json::to_string(envelope)?)
    }
}

fn to_string_indented(envelope: &Envelope, indent: usize) -> Result<String, Error> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    envelope.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(|e| Error::Json(serde_json::Error::custom(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tropo_webapi_types::actions::Hangup;

    #[test]
    fn compact_has_no_pretty_output() {
        let envelope = Envelope::new();
        assert!(CompactJsonEncoder.encode_pretty(&envelope, 4).is_none());
        assert_eq!(CompactJsonEncoder.encode(&envelope).unwrap(), r#"{"tropo":[]}"#);
    }

    #[test]
    fn pretty_uses_requested_indent() {
        let mut envelope = Envelope::new();
        envelope.push(Hangup::new());
        let text = JsonEncoder.encode_pretty(&envelope, 2).unwrap().unwrap();
        assert_eq!(text, "{\n  \"tropo\": [\n    {\n      \"hangup\": {}\n    }\n  ]\n}");
    }
}
