use serde_json::{Map, Value};

use crate::Error;
use crate::actions::{ActionParams, Destination, retain_options};

/// `transfer` action: connect an answered call to another party.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    to: Destination,

    #[serde(skip_serializing_if = "Option::is_none")]
    answer_on_media: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    choices: Option<TransferChoices>,

    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    terminator: Option<String>,
}

/// The `choices` object of a transfer: the input that cancels the transfer
/// while it rings.
///
/// Unlike [`crate::actions::Choices`] this is always `{"value": ...}`, and
/// whatever the caller passes becomes the value as is.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransferChoices {
    value: Value,
}

impl TransferChoices {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Transfer {
    pub fn new(to: impl Into<Destination>) -> Self {
        Self {
            to: to.into(),
            answer_on_media: None,
            choices: None,
            from: None,
            name: None,
            required: None,
            terminator: None,
        }
    }

    pub fn with_answer_on_media(mut self, answer_on_media: bool) -> Self {
        self.answer_on_media = Some(answer_on_media);
        self
    }

    pub fn with_choices(mut self, choices: impl Into<Value>) -> Self {
        self.choices = Some(TransferChoices::new(choices));
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

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_terminator(mut self, terminator: &str) -> Self {
        self.terminator = Some(terminator.to_string());
        self
    }

    pub fn to(&self) -> &Destination {
        &self.to
    }

    pub fn choices(&self) -> Option<&TransferChoices> {
        self.choices.as_ref()
    }
}

impl ActionParams for Transfer {
    const NAME: &'static str = "transfer";
    const OPTIONS: &'static [&'static str] = &[
        "to",
        "answerOnMedia",
        "choices",
        "from",
        "name",
        "required",
        "terminator",
    ];

    /// The supplied `choices` value is always wrapped, never interpreted.
    fn from_options(options: Value) -> Result<Self, Error> {
        let mut options = retain_options(Self::NAME, Self::OPTIONS, options)?;
        if let Some(choices) = options.get_mut("choices") {
            let mut wrapped = Map::new();
            wrapped.insert("value".to_string(), choices.take());
            *choices = Value::Object(wrapped);
        }
        serde_json::from_value(options).map_err(|source| Error::InvalidOptions {
            action: Self::NAME,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wraps_choices() {
        let transfer = Transfer::new("+14155551212")
            .with_choices("#")
            .with_from("+14155550000")
            .with_answer_on_media(false);
        assert_eq!(
            serde_json::to_string(&transfer).unwrap(),
            r##"{"to":"+14155551212","answerOnMedia":false,"choices":{"value":"#"},"from":"+14155550000"}"##
        );
    }

    #[test]
    fn from_options_wraps_any_choices_value() {
        let transfer = Transfer::from_options(json!({
            "to": "+14155551212",
            "choices": {"value": "#"},
            "timeout": 30,
        }))
        .unwrap();
        assert_eq!(transfer.choices().unwrap().value(), &json!({"value": "#"}));
        assert_eq!(
            serde_json::to_value(&transfer).unwrap(),
            json!({"to": "+14155551212", "choices": {"value": {"value": "#"}}})
        );
    }

    #[test]
    fn decoding_rendered_transfer_does_not_rewrap() {
        let transfer = Transfer::new(vec!["+14155551212", "+14155551313"]).with_choices("*");
        let text = serde_json::to_string(&transfer).unwrap();
        let decoded: Transfer = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, transfer);
    }
}
