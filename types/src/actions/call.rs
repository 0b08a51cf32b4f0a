use serde_json::{Map, Value};

use crate::actions::{ActionParams, Destination, Seconds};
use crate::consts::{Channel, Network};

/// `call` action: place an outbound call or start an outbound text session.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    /// Number, SIP address or IM handle to reach. Several are tried together.
    to: Destination,

    /// Connect the audio path as soon as media is available, before answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    answer_on_media: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<Channel>,

    /// Caller ID presented to the called party.
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<Value>,

    /// SIP headers sent with the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<Map<String, Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<Network>,

    /// Recording settings for the call, an object or a list of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    recording: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<Seconds>,
}

impl Call {
    pub fn new(to: impl Into<Destination>) -> Self {
        Self {
            to: to.into(),
            answer_on_media: None,
            channel: None,
            from: None,
            headers: None,
            name: None,
            network: None,
            recording: None,
            required: None,
            timeout: None,
        }
    }

    pub fn with_answer_on_media(mut self, answer_on_media: bool) -> Self {
        self.answer_on_media = Some(answer_on_media);
        self
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn with_from(mut self, from: impl Into<Value>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_headers(mut self, headers: Map<String, Value>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.headers
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value.into());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = Some(network);
        self
    }

    pub fn with_recording(mut self, recording: impl Into<Value>) -> Self {
        self.recording = Some(recording.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_timeout(mut self, timeout: impl Into<Seconds>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }

    pub fn to(&self) -> &Destination {
        &self.to
    }
}

impl ActionParams for Call {
    const NAME: &'static str = "call";
    const OPTIONS: &'static [&'static str] = &[
        "to",
        "answerOnMedia",
        "channel",
        "from",
        "headers",
        "name",
        "network",
        "recording",
        "required",
        "timeout",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outbound_sms() {
        let call = Call::new("+14155551212")
            .with_from("+14155550000")
            .with_channel(Channel::Text)
            .with_network(Network::Sms);
        assert_eq!(
            serde_json::to_string(&call).unwrap(),
            r#"{"to":"+14155551212","channel":"TEXT","from":"+14155550000","network":"SMS"}"#
        );
    }

    #[test]
    fn headers_accumulate() {
        let call = Call::new("sip:alice@example.com")
            .with_header("x-account", "42")
            .with_header("x-priority", 1)
            .with_answer_on_media(true);
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "to": "sip:alice@example.com",
                "answerOnMedia": true,
                "headers": {"x-account": "42", "x-priority": 1},
            })
        );
    }

    #[test]
    fn from_options_keeps_free_form_values() {
        let call = Call::from_options(json!({
            "to": ["+14155551212", "+14155551313"],
            "recording": [{"url": "http://example.com/a"}],
            "timeout": 30,
            "ringback": "tone",
        }))
        .unwrap();
        assert_eq!(
            call.to(),
            &Destination::Many(vec!["+14155551212".to_string(), "+14155551313".to_string()])
        );
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "to": ["+14155551212", "+14155551313"],
                "recording": [{"url": "http://example.com/a"}],
                "timeout": 30,
            })
        );
    }
}
