use serde_json::Value;

use crate::actions::{ActionParams, Choices, Say, Seconds};
use crate::coerce::{self, StringOrPrebuilt};

/// `record` action: play a prompt and record what the caller says next.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    attempts: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    bargein: Option<bool>,

    /// Play a beep before recording starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    beep: Option<bool>,

    /// DTMF grammar that stops the recording.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce::canonical_opt"
    )]
    choices: Option<Choices>,

    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,

    /// Seconds of silence that end the recording.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_silence: Option<Seconds>,

    /// Upper bound on the recording length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_time: Option<Seconds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    min_confidence: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce::canonical_opt"
    )]
    say: Option<Say>,

    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<Seconds>,

    /// Transcription settings, an object or a list of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    transcription: Option<Value>,

    /// Where the recording is uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = Some(attempts);
        self
    }

    pub fn with_bargein(mut self, bargein: bool) -> Self {
        self.bargein = Some(bargein);
        self
    }

    pub fn with_beep(mut self, beep: bool) -> Self {
        self.beep = Some(beep);
        self
    }

    pub fn with_choices(mut self, choices: impl Into<StringOrPrebuilt<Choices>>) -> Self {
        self.choices = Some(choices.into().into_canonical());
        self
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn with_max_silence(mut self, max_silence: impl Into<Seconds>) -> Self {
        self.max_silence = Some(max_silence.into());
        self
    }

    pub fn with_max_time(mut self, max_time: impl Into<Seconds>) -> Self {
        self.max_time = Some(max_time.into());
        self
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
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

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
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

    pub fn with_transcription(mut self, transcription: impl Into<Value>) -> Self {
        self.transcription = Some(transcription.into());
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn choices(&self) -> Option<&Choices> {
        self.choices.as_ref()
    }

    pub fn say(&self) -> Option<&Say> {
        self.say.as_ref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl ActionParams for Record {
    const NAME: &'static str = "record";
    const OPTIONS: &'static [&'static str] = &[
        "attempts",
        "bargein",
        "beep",
        "choices",
        "format",
        "maxSilence",
        "maxTime",
        "method",
        "minConfidence",
        "name",
        "password",
        "required",
        "say",
        "timeout",
        "transcription",
        "url",
        "username",
    ];
}
