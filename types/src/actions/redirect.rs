use crate::actions::{ActionParams, Destination};

/// `redirect` action: send an unanswered incoming call elsewhere.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Redirect {
    to: Destination,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,
}

impl Redirect {
    pub fn new(to: impl Into<Destination>) -> Self {
        Self {
            to: to.into(),
            name: None,
            required: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn to(&self) -> &Destination {
        &self.to
    }
}

impl ActionParams for Redirect {
    const NAME: &'static str = "redirect";
    const OPTIONS: &'static [&'static str] = &["to", "name", "required"];
}
