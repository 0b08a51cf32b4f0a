use serde_json::Value;

use crate::actions::{ActionParams, Destination, Say, Seconds};
use crate::coerce::{self, StringOrPrebuilt};
use crate::consts::{Channel, Network};

/// `message` action: start a new session, say something and hang up.
///
/// The usual way to send a one-off SMS or IM.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(deserialize_with = "coerce::canonical")]
    say: Say,

    to: Destination,

    #[serde(skip_serializing_if = "Option::is_none")]
    answer_on_media: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<Channel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<Network>,

    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<Seconds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    voice: Option<String>,
}

impl Message {
    pub fn new(say: impl Into<StringOrPrebuilt<Say>>, to: impl Into<Destination>) -> Self {
        Self {
            say: say.into().into_canonical(),
            to: to.into(),
            answer_on_media: None,
            channel: None,
            from: None,
            name: None,
            network: None,
            required: None,
            timeout: None,
            voice: None,
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

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = Some(network);
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

    pub fn with_voice(mut self, voice: &str) -> Self {
        self.voice = Some(voice.to_string());
        self
    }

    pub fn say(&self) -> &Say {
        &self.say
    }

    pub fn to(&self) -> &Destination {
        &self.to
    }
}

impl ActionParams for Message {
    const NAME: &'static str = "message";
    const OPTIONS: &'static [&'static str] = &[
        "say",
        "to",
        "answerOnMedia",
        "channel",
        "from",
        "name",
        "network",
        "required",
        "timeout",
        "voice",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;
    use serde_json::json;

    #[test]
    fn bare_text_becomes_say_object() {
        let message = Message::new("Your order shipped", "+14155551212")
            .with_channel(Channel::Text)
            .with_network(Network::Sms);
        assert_eq!(
            serde_json::to_string(&Action::from(message)).unwrap(),
            r#"{"message":{"say":{"value":"Your order shipped"},"to":"+14155551212","channel":"TEXT","network":"SMS"}}"#
        );
    }

    #[test]
    fn prebuilt_say_is_kept() {
        let message = Message::new(Say::new("4155551212").with_as("DIGITS"), "+14155551212").with_voice("kate");
        assert_eq!(message.say(), &Say::new("4155551212").with_as("DIGITS"));
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "say": {"value": "4155551212", "as": "DIGITS"},
                "to": "+14155551212",
                "voice": "kate",
            })
        );
    }

    #[test]
    fn from_options_promotes_say() {
        let message = Message::from_options(json!({
            "to": "alice@example.com",
            "say": "ping",
            "network": "JABBER",
        }))
        .unwrap();
        assert_eq!(
            message,
            Message::new("ping", "alice@example.com").with_network(Network::Jabber)
        );
    }

    #[test]
    fn from_options_unwraps_built_say() {
        let message = Message::from_options(json!({
            "say": {"say": {"value": "hi", "as": "DIGITS"}},
            "to": "+14155551212",
        }))
        .unwrap();
        assert_eq!(message.say(), &Say::new("hi").with_as("DIGITS"));

        let message = Message::from_options(json!({"say": ["one", "two"], "to": "+14155551212"})).unwrap();
        assert_eq!(message.say(), &Say::many(["one", "two"]));
    }
}
