use crate::actions::ActionParams;

/// `reject` action: refuse an incoming session before it is answered.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reject {}

impl Reject {
    pub fn new() -> Self {
        Self {}
    }
}

impl ActionParams for Reject {
    const NAME: &'static str = "reject";
    const OPTIONS: &'static [&'static str] = &[];
}
