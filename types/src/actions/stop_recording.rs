use crate::actions::ActionParams;

/// `stopRecording` action: stop a recording begun with `startRecording`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StopRecording {}

impl StopRecording {
    pub fn new() -> Self {
        Self {}
    }
}

impl ActionParams for StopRecording {
    const NAME: &'static str = "stopRecording";
    const OPTIONS: &'static [&'static str] = &[];
}
