use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::Error;

const RESULT_KEYS: [&str; 7] = [
    "actions",
    "complete",
    "error",
    "sequence",
    "sessionDuration",
    "sessionId",
    "state",
];

/// The payload posted back to the application after the actions of a
/// script have run.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundResult {
    /// One mapping, or a list of mappings when several actions ran.
    actions: Value,
    complete: bool,
    error: Option<String>,
    sequence: i64,
    session_duration: i64,
    session_id: String,
    state: String,
}

/// The outcome of one action inside a result.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutcome {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub attempts: Option<u32>,
    /// "SUCCESS", "TIMEOUT", "NOMATCH", ...
    #[serde(default)]
    pub disposition: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub interpretation: Option<String>,
    #[serde(default)]
    pub utterance: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub concept: Option<String>,
}

impl InboundResult {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        tracing::debug!(payload = json, "decoding result payload");
        let mut document: Value = serde_json::from_str(json)?;
        let result = super::take_object(&mut document, "result")?;
        if let Some(missing) = RESULT_KEYS.iter().find(|key| !result.contains_key(**key)) {
            return Err(Error::missing(missing));
        }
        Ok(serde_json::from_value(Value::Object(result))?)
    }

    /// The `interpretation` of the first action.
    pub fn value(&self) -> Result<&Value, Error> {
        self.first_action()?
            .get("interpretation")
            .ok_or_else(|| Error::missing("interpretation"))
    }

    pub fn actions(&self) -> Result<Vec<ActionOutcome>, Error> {
        match &self.actions {
            Value::Array(list) => list
                .iter()
                .map(|action| ActionOutcome::deserialize(action).map_err(Error::from))
                .collect(),
            Value::Object(_) => Ok(vec![ActionOutcome::deserialize(&self.actions)?]),
            _ => Err(Self::unsupported_actions()),
        }
    }

    pub fn raw_actions(&self) -> &Value {
        &self.actions
    }

    pub fn complete(&self) -> bool {
        self.complete
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn sequence(&self) -> i64 {
        self.sequence
    }

    pub fn session_duration(&self) -> i64 {
        self.session_duration
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    fn first_action(&self) -> Result<&Map<String, Value>, Error> {
        let action = match &self.actions {
            Value::Array(list) => {
                tracing::debug!("actions is a list of {}", list.len());
                list.first().ok_or_else(|| Error::missing("actions[0]"))?
            }
            other => other,
        };
        action.as_object().ok_or_else(Self::unsupported_actions)
    }

    fn unsupported_actions() -> Error {
        Error::UnsupportedShape {
            field: "actions",
            expected: "a mapping or a list of mappings",
        }
    }
}

impl FromStr for InboundResult {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
