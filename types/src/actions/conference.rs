use crate::actions::ActionParams;

/// `conference` action: join the session into a conference room.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    /// Room identifier; sessions using the same id talk to each other.
    id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    mute: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    /// Play DTMF tones pressed by participants to the room.
    #[serde(skip_serializing_if = "Option::is_none")]
    play_tones: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,

    /// DTMF key that leaves the conference.
    #[serde(skip_serializing_if = "Option::is_none")]
    terminator: Option<String>,
}

impl Conference {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            mute: None,
            name: None,
            play_tones: None,
            required: None,
            terminator: None,
        }
    }

    pub fn with_mute(mut self, mute: bool) -> Self {
        self.mute = Some(mute);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_play_tones(mut self, play_tones: bool) -> Self {
        self.play_tones = Some(play_tones);
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

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl ActionParams for Conference {
    const NAME: &'static str = "conference";
    const OPTIONS: &'static [&'static str] =
        &["id", "mute", "name", "playTones", "required", "terminator"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_camel_case_keys() {
        let conference = Conference::new("1234")
            .with_mute(false)
            .with_play_tones(true)
            .with_terminator("#");
        assert_eq!(
            serde_json::to_string(&conference).unwrap(),
            r##"{"id":"1234","mute":false,"playTones":true,"terminator":"#"}"##
        );
    }
}
