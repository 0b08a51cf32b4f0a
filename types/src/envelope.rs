use crate::{Action, Error};

/// The top-level document sent back to the platform: `{"tropo": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Envelope {
    tropo: Vec<Action>,
}

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: impl Into<Action>) {
        self.tropo.push(action.into());
    }

    pub fn actions(&self) -> &[Action] {
        &self.tropo
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.tropo
    }

    /// Decodes a previously rendered document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<Action>> for Envelope {
    fn from(tropo: Vec<Action>) -> Self {
        Self { tropo }
    }
}
