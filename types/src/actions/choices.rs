use crate::actions::ActionParams;
use crate::coerce::{Canonical, StringOrPrebuilt};

/// The grammar an `ask` or `record` listens for.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Choices {
    /// Grammar text or a grammar URL, e.g. "[5 digits]" or "yes, no".
    value: String,

    /// DTMF key that ends collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    terminator: Option<String>,

    /// Recognition mode: "dtmf", "speech" or "any".
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<String>,
}

impl Choices {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            terminator: None,
            mode: None,
        }
    }

    pub fn with_terminator(mut self, terminator: &str) -> Self {
        self.terminator = Some(terminator.to_string());
        self
    }

    pub fn with_mode(mut self, mode: &str) -> Self {
        self.mode = Some(mode.to_string());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn terminator(&self) -> Option<&str> {
        self.terminator.as_deref()
    }

    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }
}

impl ActionParams for Choices {
    const NAME: &'static str = "choices";
    const OPTIONS: &'static [&'static str] = &["value", "terminator", "mode"];
}

impl Canonical for Choices {
    fn from_text(text: String) -> Self {
        Self {
            value: text,
            terminator: None,
            mode: None,
        }
    }
}

impl From<Choices> for StringOrPrebuilt<Choices> {
    fn from(choices: Choices) -> Self {
        StringOrPrebuilt::Prebuilt(choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_value_then_options() {
        let choices = Choices::new("[4 DIGITS]").with_mode("dtmf").with_terminator("#");
        assert_eq!(
            serde_json::to_string(&choices).unwrap(),
            r##"{"value":"[4 DIGITS]","terminator":"#","mode":"dtmf"}"##
        );
    }

    #[test]
    fn from_options() {
        let choices = Choices::from_options(json!({"mode": "speech", "value": "yes, no", "grammar": "x"})).unwrap();
        assert_eq!(choices, Choices::new("yes, no").with_mode("speech"));
    }
}
