use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::str::FromStr;

/// Event names an `on` handler can be registered for.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Continue,
    Error,
    Incomplete,
    Hangup,
    Custom(String),
}

impl Event {
    pub fn as_str(&self) -> &str {
        match self {
            Event::Continue => "continue",
            Event::Error => "error",
            Event::Incomplete => "incomplete",
            Event::Hangup => "hangup",
            Event::Custom(s) => s,
        }
    }
}

impl From<&str> for Event {
    fn from(s: &str) -> Self {
        match s {
            "continue" => Event::Continue,
            "error" => Event::Error,
            "incomplete" => Event::Incomplete,
            "hangup" => Event::Hangup,
            _ => Event::Custom(s.to_string()),
        }
    }
}

impl FromStr for Event {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Event::from(s))
    }
}

impl Serialize for Event {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Event::from(s.as_str()))
    }
}

/// The channel a session or outbound call runs on.
#[derive(Debug, Clone, PartialEq)]
pub enum Channel {
    Voice,
    Text,
    Custom(String),
}

impl Channel {
    pub fn as_str(&self) -> &str {
        match self {
            Channel::Voice => "VOICE",
            Channel::Text => "TEXT",
            Channel::Custom(s) => s,
        }
    }
}

impl From<&str> for Channel {
    fn from(s: &str) -> Self {
        match s {
            "VOICE" => Channel::Voice,
            "TEXT" => Channel::Text,
            _ => Channel::Custom(s.to_string()),
        }
    }
}

impl FromStr for Channel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Channel::from(s))
    }
}

impl Serialize for Channel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Channel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Channel::from(s.as_str()))
    }
}

/// The network a session or outbound call uses within its channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Network {
    Pstn,
    Voip,
    Sip,
    Sms,
    Inum,
    Jabber,
    Aim,
    Gtalk,
    Msn,
    Yahoo,
    Twitter,
    Custom(String),
}

impl Network {
    pub fn as_str(&self) -> &str {
        match self {
            Network::Pstn => "PSTN",
            Network::Voip => "VOIP",
            Network::Sip => "SIP",
            Network::Sms => "SMS",
            Network::Inum => "INUM",
            Network::Jabber => "JABBER",
            Network::Aim => "AIM",
            Network::Gtalk => "GTALK",
            Network::Msn => "MSN",
            Network::Yahoo => "YAHOO",
            Network::Twitter => "TWITTER",
            Network::Custom(s) => s,
        }
    }
}

impl From<&str> for Network {
    fn from(s: &str) -> Self {
        match s {
            "PSTN" => Network::Pstn,
            "VOIP" => Network::Voip,
            "SIP" => Network::Sip,
            "SMS" => Network::Sms,
            "INUM" => Network::Inum,
            "JABBER" => Network::Jabber,
            "AIM" => Network::Aim,
            "GTALK" => Network::Gtalk,
            "MSN" => Network::Msn,
            "YAHOO" => Network::Yahoo,
            "TWITTER" => Network::Twitter,
            _ => Network::Custom(s.to_string()),
        }
    }
}

impl FromStr for Network {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Network::from(s))
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Network::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    struct Route {
        #[serde(skip_serializing_if = "Option::is_none")]
        channel: Option<Channel>,
        #[serde(skip_serializing_if = "Option::is_none")]
        network: Option<Network>,
    }

    #[test]
    fn test_serialize() {
        let route = Route {
            channel: Some(Channel::Text),
            network: Some(Network::Sms),
        };
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#"{"channel":"TEXT","network":"SMS"}"#);

        let route = Route {
            channel: None,
            network: Some(Network::Custom("SKYPE".to_string())),
        };
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#"{"network":"SKYPE"}"#);
    }

    #[test]
    fn test_deserialize() {
        let route: Route = serde_json::from_str(r#"{"channel":"VOICE","network":"SIP"}"#).unwrap();
        assert_eq!(route.channel, Some(Channel::Voice));
        assert_eq!(route.network, Some(Network::Sip));

        let route: Route = serde_json::from_str(r#"{"channel":"FAX"}"#).unwrap();
        assert_eq!(route.channel, Some(Channel::Custom("FAX".to_string())));
        assert_eq!(route.network, None);
    }

    #[test]
    fn unknown_events_pass_through() {
        assert_eq!("hangup".parse::<Event>().unwrap(), Event::Hangup);
        let event: Event = "transfer".parse().unwrap();
        assert_eq!(event.as_str(), "transfer");
        assert_eq!(serde_json::to_string(&event).unwrap(), r#""transfer""#);
    }
}
