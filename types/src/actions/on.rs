use crate::actions::{ActionParams, Say};
use crate::coerce::{self, StringOrPrebuilt};
use crate::consts::Event;

/// `on` action: register where the platform posts when an event fires.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct On {
    event: Event,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    /// URL the platform fetches the next script from.
    #[serde(skip_serializing_if = "Option::is_none")]
    next: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce::canonical_opt"
    )]
    say: Option<Say>,
}

impl On {
    pub fn new(event: impl Into<Event>) -> Self {
        Self {
            event: event.into(),
            name: None,
            next: None,
            required: None,
            say: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_next(mut self, next: &str) -> Self {
        self.next = Some(next.to_string());
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

    pub fn event(&self) -> &Event {
        &self.event
    }
}

impl ActionParams for On {
    const NAME: &'static str = "on";
    const OPTIONS: &'static [&'static str] = &["event", "name", "next", "required", "say"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    #[test]
    fn continue_handler() {
        let on = On::new(Event::Continue).with_next("/answer").with_say("One moment");
        assert_eq!(
            serde_json::to_string(&Action::from(on)).unwrap(),
            r#"{"on":{"event":"continue","next":"/answer","say":{"value":"One moment"}}}"#
        );
    }

    #[test]
    fn custom_event_name() {
        let on = On::new("timeout");
        assert_eq!(on.event(), &Event::Custom("timeout".to_string()));
        assert_eq!(serde_json::to_string(&on).unwrap(), r#"{"event":"timeout"}"#);
    }
}
