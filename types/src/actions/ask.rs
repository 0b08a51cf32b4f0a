use crate::actions::{ActionParams, Choices, Say, Seconds};
use crate::coerce::{self, StringOrPrebuilt};

/// `ask` action: prompt the caller and wait for a response.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ask {
    /// What the caller may answer with.
    #[serde(deserialize_with = "coerce::canonical")]
    choices: Choices,

    /// How many times the prompt is repeated before giving up.
    #[serde(skip_serializing_if = "Option::is_none")]
    attempts: Option<u32>,

    /// Whether caller input interrupts the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    bargein: Option<bool>,

    /// Minimum recognition confidence, 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    min_confidence: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    /// Speech recognizer language, e.g. "en-us".
    #[serde(skip_serializing_if = "Option::is_none")]
    recognizer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,

    /// The prompt.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce::canonical_opt"
    )]
    say: Option<Say>,

    /// Seconds to wait for input.
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<Seconds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    voice: Option<String>,
}

impl Ask {
    pub fn new(choices: impl Into<StringOrPrebuilt<Choices>>) -> Self {
        Self {
            choices: choices.into().into_canonical(),
            attempts: None,
            bargein: None,
            min_confidence: None,
            name: None,
            recognizer: None,
            required: None,
            say: None,
            timeout: None,
            voice: None,
        }
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = Some(attempts);
        self
    }

    pub fn with_bargein(mut self, bargein: bool) -> Self {
        self.bargein = Some(bargein);
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: u32) -> Self {
        self.min_confidence = Some(min_confidence);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_recognizer(mut self, recognizer: &str) -> Self {
        self.recognizer = Some(recognizer.to_string());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_say(mut self, say: impl Into<StringOrPrebuilt<Say>>) -> Self {
        self.say = Some(say.into().into_canonical());
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

    pub fn choices(&self) -> &Choices {
        &self.choices
    }

    pub fn say(&self) -> Option<&Say> {
        self.say.as_ref()
    }
}

impl ActionParams for Ask {
    const NAME: &'static str = "ask";
    const OPTIONS: &'static [&'static str] = &[
        "choices",
        "attempts",
        "bargein",
        "minConfidence",
        "name",
        "recognizer",
        "required",
        "say",
        "timeout",
        "voice",
    ];
}
