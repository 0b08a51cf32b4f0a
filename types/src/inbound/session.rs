use std::str::FromStr;

use serde_json::{Map, Value};

use crate::Error;
use crate::consts::{Channel, Network};

/// The payload posted to the application when a new session arrives.
///
/// Every key of the `session` object is kept and can be looked up by name.
/// The documented keys also have typed accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundSession {
    fields: Map<String, Value>,
}

/// One side of a session: who called, or who was called.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub channel: Option<Channel>,
    #[serde(default)]
    pub network: Option<Network>,
}

impl InboundSession {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        tracing::debug!(payload = json, "decoding session payload");
        let mut document: Value = serde_json::from_str(json)?;
        let fields = super::take_object(&mut document, "session")?;
        for (key, value) in &fields {
            tracing::trace!(key = %key, value = %value, "session field");
        }
        Ok(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn account_id(&self) -> Option<&str> {
        self.str_field("accountId")
    }

    pub fn call_id(&self) -> Option<&str> {
        self.str_field("callId")
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.str_field("timestamp")
    }

    /// "HUMAN", "MACHINE" or "NONE".
    pub fn user_type(&self) -> Option<&str> {
        self.str_field("userType")
    }

    /// The first message of a text session.
    pub fn initial_text(&self) -> Option<&str> {
        self.str_field("initialText")
    }

    pub fn to(&self) -> Option<Endpoint> {
        self.endpoint_field("to")
    }

    pub fn from(&self) -> Option<Endpoint> {
        self.endpoint_field("from")
    }

    pub fn headers(&self) -> Option<&Map<String, Value>> {
        self.fields.get("headers").and_then(Value::as_object)
    }

    /// Parameters passed when the session was launched through the session API.
    pub fn parameters(&self) -> Option<&Map<String, Value>> {
        self.fields.get("parameters").and_then(Value::as_object)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    fn endpoint_field(&self, key: &str) -> Option<Endpoint> {
        let value = self.fields.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(endpoint) => Some(endpoint),
            Err(e) => {
                tracing::debug!("session field {} is not an endpoint: {}", key, e);
                None
            }
        }
    }
}

impl FromStr for InboundSession {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SESSION: &str = r#"{"session":{
        "id":"0a1b2c3d",
        "accountId":"33932",
        "callId":"ca9f7d",
        "timestamp":"2010-02-18T19:07:36.375Z",
        "userType":"HUMAN",
        "initialText":null,
        "to":{"id":"9991427645","name":"unknown","channel":"VOICE","network":"PSTN"},
        "from":{"id":"jsgoecke","name":"unknown","channel":"TEXT","network":"JABBER"},
        "headers":{"x-sbc-from":"\"unknown\"<sip:4155551212@10.6.69.201>"},
        "parameters":{"customerId":"42"}
    }}"#;

    #[test]
    fn exposes_every_key() {
        let session = InboundSession::from_json(SESSION).unwrap();
        assert_eq!(session.len(), 10);
        assert_eq!(
            session.keys().collect::<Vec<_>>(),
            vec![
                "id", "accountId", "callId", "timestamp", "userType", "initialText", "to", "from",
                "headers", "parameters"
            ]
        );
        assert_eq!(session.get("accountId"), Some(&json!("33932")));
        assert_eq!(session.get("initialText"), Some(&Value::Null));
        assert!(session.contains_key("callId"));
    }

    #[test]
    fn typed_accessors() {
        let session: InboundSession = SESSION.parse().unwrap();
        assert_eq!(session.id(), Some("0a1b2c3d"));
        assert_eq!(session.account_id(), Some("33932"));
        assert_eq!(session.call_id(), Some("ca9f7d"));
        assert_eq!(session.user_type(), Some("HUMAN"));
        assert_eq!(session.initial_text(), None);

        let from = session.from().unwrap();
        assert_eq!(from.id.as_deref(), Some("jsgoecke"));
        assert_eq!(from.channel, Some(Channel::Text));
        assert_eq!(from.network, Some(Network::Jabber));
        assert_eq!(session.to().unwrap().network, Some(Network::Pstn));

        assert_eq!(session.parameters().unwrap().get("customerId"), Some(&json!("42")));
        assert!(session.headers().unwrap().contains_key("x-sbc-from"));
    }

    #[test]
    fn keeps_unknown_keys() {
        let session = InboundSession::from_json(r#"{"session":{"id":"1","region":"eu-west"}}"#).unwrap();
        assert_eq!(session.get("region"), Some(&json!("eu-west")));
        assert_eq!(session.iter().count(), 2);
        assert!(session.to().is_none());
    }

    #[test]
    fn missing_session_key() {
        let err = InboundSession::from_json(r#"{"result":{}}"#).unwrap_err();
        assert!(matches!(err, Error::MissingKey(key) if key == "session"));

        let err = InboundSession::from_json("[]").unwrap_err();
        assert!(matches!(err, Error::MissingKey(_)));
    }

    #[test]
    fn session_must_be_a_mapping() {
        let err = InboundSession::from_json(r#"{"session":"abc"}"#).unwrap_err();
        assert!(matches!(err, Error::UnsupportedShape { field: "session", .. }));
    }

    #[test]
    fn malformed_json() {
        let err = InboundSession::from_json("{session").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
