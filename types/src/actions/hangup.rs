use crate::actions::ActionParams;

/// `hangup` action: end the current session.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hangup {}

impl Hangup {
    pub fn new() -> Self {
        Self {}
    }
}

impl ActionParams for Hangup {
    const NAME: &'static str = "hangup";
    const OPTIONS: &'static [&'static str] = &[];
}
