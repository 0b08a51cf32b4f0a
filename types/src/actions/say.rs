use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;
use crate::actions::{ActionParams, retain_options};
use crate::coerce::{Canonical, StringOrPrebuilt};

/// The parameter object of one spoken or sent message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SayParams {
    /// Text to speak or send, or the URL of an audio file.
    value: String,

    /// How to read the text, e.g. "DIGITS", "DATE" or "CURRENCY".
    #[serde(rename = "as", skip_serializing_if = "Option::is_none")]
    say_as: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,
}

impl SayParams {
    fn new(value: String) -> Self {
        Self {
            value,
            say_as: None,
            name: None,
            required: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn say_as(&self) -> Option<&str> {
        self.say_as.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn required(&self) -> Option<bool> {
        self.required
    }
}

/// `say` action: speak to a voice caller or send text on a text channel.
///
/// A single message renders as one parameter object; several messages
/// render as a list of them in the order given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Say {
    Single(SayParams),
    Many(Vec<SayParams>),
}

impl Say {
    pub fn new(message: &str) -> Self {
        Say::Single(SayParams::new(message.to_string()))
    }

    pub fn many<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Say::Many(
            messages
                .into_iter()
                .map(|message| SayParams::new(message.into()))
                .collect(),
        )
    }

    /// Options set here apply to every message.
    pub fn with_as(self, say_as: &str) -> Self {
        self.map_params(|params| params.say_as = Some(say_as.to_string()))
    }

    pub fn with_name(self, name: &str) -> Self {
        self.map_params(|params| params.name = Some(name.to_string()))
    }

    pub fn with_required(self, required: bool) -> Self {
        self.map_params(|params| params.required = Some(required))
    }

    pub fn params(&self) -> &[SayParams] {
        match self {
            Say::Single(params) => std::slice::from_ref(params),
            Say::Many(list) => list,
        }
    }

    fn map_params(mut self, mut f: impl FnMut(&mut SayParams)) -> Self {
        match &mut self {
            Say::Single(params) => f(params),
            Say::Many(list) => list.iter_mut().for_each(&mut f),
        }
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SayMessage {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
struct SayOptions {
    value: SayMessage,
    #[serde(rename = "as")]
    say_as: Option<String>,
    name: Option<String>,
    required: Option<bool>,
}

impl ActionParams for Say {
    const NAME: &'static str = "say";
    const OPTIONS: &'static [&'static str] = &["value", "as", "name", "required"];

    /// `value` may be a single message or a list of messages.
    fn from_options(options: Value) -> Result<Self, Error> {
        let options = retain_options(Self::NAME, Self::OPTIONS, options)?;
        let options: SayOptions =
            serde_json::from_value(options).map_err(|source| Error::InvalidOptions {
                action: Self::NAME,
                source,
            })?;

        let mut say = match options.value {
            SayMessage::One(message) => Say::Single(SayParams::new(message)),
            SayMessage::Many(messages) => Say::many(messages),
        };
        if let Some(say_as) = options.say_as {
            say = say.with_as(&say_as);
        }
        if let Some(name) = options.name {
            say = say.with_name(&name);
        }
        if let Some(required) = options.required {
            say = say.with_required(required);
        }
        Ok(say)
    }
}

impl Canonical for Say {
    fn from_text(text: String) -> Self {
        Say::Single(SayParams::new(text))
    }

    fn from_texts(texts: Vec<String>) -> Option<Self> {
        Some(Say::many(texts))
    }
}

impl From<Say> for StringOrPrebuilt<Say> {
    fn from(say: Say) -> Self {
        StringOrPrebuilt::Prebuilt(say)
    }
}

impl From<Vec<&str>> for StringOrPrebuilt<Say> {
    fn from(messages: Vec<&str>) -> Self {
        StringOrPrebuilt::Prebuilt(Say::many(messages))
    }
}

impl From<&str> for Say {
    fn from(message: &str) -> Self {
        Say::new(message)
    }
}

impl From<String> for Say {
    fn from(message: String) -> Self {
        Say::Single(SayParams::new(message))
    }
}

impl From<Vec<&str>> for Say {
    fn from(messages: Vec<&str>) -> Self {
        Say::many(messages)
    }
}

impl From<Vec<String>> for Say {
    fn from(messages: Vec<String>) -> Self {
        Say::many(messages)
    }
}
