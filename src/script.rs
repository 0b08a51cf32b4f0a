use tropo_webapi_types::actions::{
    Ask, Call, Conference, Hangup, Message, On, Record, Redirect, Reject, Say, StartRecording,
    StopRecording, Transfer,
};
use tropo_webapi_types::{Action, Envelope, Error};

mod config;
mod consts;
mod encoder;

pub use config::{Config, ConfigBuilder, ConfigError};
pub use encoder::{CompactJsonEncoder, Encoder, JsonEncoder};

/// The script for one turn of one session.
///
/// Actions are kept in the order they were added and rendered together as
/// `{"tropo": [...]}`. A script is owned by exactly one session; start a new
/// one for every request.
pub struct Tropo<E: Encoder = JsonEncoder> {
    steps: Envelope,
    encoder: E,
    config: Config,
}

impl Tropo {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        Tropo::with_encoder(JsonEncoder, config)
    }
}

impl Default for Tropo {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Encoder> Tropo<E> {
    pub fn with_encoder(encoder: E, config: Config) -> Self {
        Self {
            steps: Envelope::new(),
            encoder,
            config,
        }
    }

    pub fn append(&mut self, action: impl Into<Action>) {
        let action = action.into();
        tracing::trace!("appending {} as step {}", action.name(), self.len());
        self.steps.push(action);
    }

    /// Prompts the caller and waits for a response.
    pub fn ask(&mut self, ask: Ask) {
        self.append(ask);
    }

    pub fn call(&mut self, call: Call) {
        self.append(call);
    }

    pub fn conference(&mut self, conference: Conference) {
        self.append(conference);
    }

    pub fn hangup(&mut self) {
        self.append(Hangup::new());
    }

    pub fn message(&mut self, message: Message) {
        self.append(message);
    }

    /// Registers an event handler. Events are "continue", "error",
    /// "incomplete" and "hangup".
    pub fn on(&mut self, on: On) {
        self.append(on);
    }

    pub fn record(&mut self, record: Record) {
        self.append(record);
    }

    pub fn redirect(&mut self, redirect: Redirect) {
        self.append(redirect);
    }

    pub fn reject(&mut self) {
        self.append(Reject::new());
    }

    /// Adds a `say` step and hands back its parameters, so they can be
    /// reused inside another action.
    pub fn say(&mut self, say: impl Into<Say>) -> Say {
        let say = say.into();
        self.append(say.clone());
        say
    }

    pub fn start_recording(&mut self, start_recording: StartRecording) {
        self.append(start_recording);
    }

    pub fn stop_recording(&mut self) {
        self.append(StopRecording::new());
    }

    pub fn transfer(&mut self, transfer: Transfer) {
        self.append(transfer);
    }

    pub fn actions(&self) -> &[Action] {
        self.steps.actions()
    }

    pub fn len(&self) -> usize {
        self.steps.actions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.actions().is_empty()
    }

    pub fn envelope(&self) -> &Envelope {
        &self.steps
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Renders with the configured layout.
    pub fn render(&self) -> Result<String, Error> {
        self.render_pretty(self.config.pretty())
    }

    /// Renders the script. Falls back to compact output when `pretty` is
    /// asked for but the encoder cannot indent.
    pub fn render_pretty(&self, pretty: bool) -> Result<String, Error> {
        tracing::debug!("rendering {} steps, pretty={}", self.len(), pretty);
        if pretty {
            if let Some(rendered) = self.encoder.encode_pretty(&self.steps, self.config.indent()) {
                return rendered;
            }
            tracing::debug!("encoder has no pretty output, rendering compact");
        }
        self.encoder.encode(&self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tropo_webapi_types::actions::Choices;
    use tropo_webapi_types::consts::{Channel, Event, Network};

    #[test]
    fn say_then_hangup() {
        let mut tropo = Tropo::new();
        tropo.say("hi");
        tropo.hangup();
        assert_eq!(tropo.len(), 2);
        assert_eq!(
            tropo.render().unwrap(),
            r#"{"tropo":[{"say":{"value":"hi"}},{"hangup":{}}]}"#
        );
    }

    #[test]
    fn say_returns_its_parameters() {
        let mut tropo = Tropo::new();
        let greeting = tropo.say(Say::new("Welcome").with_name("greeting"));
        tropo.ask(Ask::new("yes, no").with_say(greeting.clone()));

        let rendered: Value = serde_json::from_str(&tropo.render().unwrap()).unwrap();
        assert_eq!(rendered["tropo"][0]["say"], json!({"value": "Welcome", "name": "greeting"}));
        assert_eq!(rendered["tropo"][1]["ask"]["say"], rendered["tropo"][0]["say"]);
        assert_eq!(greeting, Say::new("Welcome").with_name("greeting"));
    }

    #[test]
    fn say_accepts_a_list() {
        let mut tropo = Tropo::new();
        let said = tropo.say(vec!["a", "b"]);
        assert_eq!(said, Say::many(["a", "b"]));
        assert_eq!(
            tropo.render().unwrap(),
            r#"{"tropo":[{"say":[{"value":"a"},{"value":"b"}]}]}"#
        );
    }

    #[test]
    fn keeps_call_order() {
        let mut tropo = Tropo::new();
        tropo.on(On::new(Event::Continue).with_next("/continue"));
        tropo.on(On::new(Event::Hangup).with_next("/hangup"));
        tropo.ask(
            Ask::new(Choices::new("[5 digits]").with_terminator("#"))
                .with_say("Please enter your 5 digit zip code.")
                .with_attempts(3)
                .with_bargein(true)
                .with_name("zip")
                .with_timeout(5.0)
                .with_voice("dave"),
        );
        tropo.start_recording(StartRecording::new("http://example.com/rec"));
        tropo.conference(Conference::new("room-1").with_mute(false));
        tropo.stop_recording();
        tropo.call(Call::new("+14155551212").with_channel(Channel::Text).with_network(Network::Sms));
        tropo.message(Message::new("Bye", "+14155551212"));
        tropo.record(Record::new().with_url("http://example.com/vm"));
        tropo.redirect(Redirect::new("sip:desk@example.com"));
        tropo.transfer(Transfer::new("+14155551313").with_choices("*"));
        tropo.reject();

        let names: Vec<_> = tropo.actions().iter().map(Action::name).collect();
        assert_eq!(
            names,
            vec![
                "on", "on", "ask", "startRecording", "conference", "stopRecording", "call",
                "message", "record", "redirect", "transfer", "reject"
            ]
        );

        let rendered: Value = serde_json::from_str(&tropo.render().unwrap()).unwrap();
        assert_eq!(rendered["tropo"].as_array().unwrap().len(), 12);
        assert_eq!(
            rendered["tropo"][2],
            json!({"ask": {
                "choices": {"value": "[5 digits]", "terminator": "#"},
                "attempts": 3,
                "bargein": true,
                "name": "zip",
                "say": {"value": "Please enter your 5 digit zip code."},
                "timeout": 5.0,
                "voice": "dave",
            }})
        );
    }

    #[test]
    fn round_trips_through_generic_json() {
        let mut tropo = Tropo::new();
        tropo.say(Say::many(["one", "two"]).with_as("DIGITS"));
        tropo.ask(Ask::new("[5 digits]").with_attempts(3).with_say("Enter zip"));
        tropo.transfer(Transfer::new(vec!["+14155551212", "sip:a@example.com"]).with_choices("#"));
        tropo.hangup();

        let rendered = tropo.render().unwrap();
        let generic: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(generic, serde_json::to_value(tropo.envelope()).unwrap());

        let decoded = Envelope::from_json(&rendered).unwrap();
        assert_eq!(&decoded, tropo.envelope());
    }

    #[test]
    fn pretty_render() {
        let mut tropo = Tropo::new();
        tropo.hangup();
        assert_eq!(
            tropo.render_pretty(true).unwrap(),
            "{\n    \"tropo\": [\n        {\n            \"hangup\": {}\n        }\n    ]\n}"
        );

        let config = Config::builder().with_pretty(true).with_indent(1).build();
        let mut tropo = Tropo::with_config(config);
        tropo.reject();
        assert_eq!(tropo.render().unwrap(), "{\n \"tropo\": [\n  {\n   \"reject\": {}\n  }\n ]\n}");
    }

    #[test]
    fn pretty_falls_back_to_compact() {
        let config = Config::builder().with_pretty(true).build();
        let mut tropo = Tropo::with_encoder(CompactJsonEncoder, config);
        tropo.say("hi");
        assert_eq!(tropo.render().unwrap(), r#"{"tropo":[{"say":{"value":"hi"}}]}"#);
        assert_eq!(tropo.render_pretty(true).unwrap(), tropo.render_pretty(false).unwrap());
    }

    #[test]
    fn empty_script() {
        let tropo = Tropo::default();
        assert!(tropo.is_empty());
        assert_eq!(tropo.render().unwrap(), r#"{"tropo":[]}"#);
    }

    #[test]
    fn append_takes_dynamic_actions() {
        let mut tropo = Tropo::new();
        tropo.append(Action::from_options("say", json!({"value": "hello", "speed": 2})).unwrap());
        tropo.append(Action::from_options("hangup", Value::Null).unwrap());
        assert_eq!(
            tropo.render().unwrap(),
            r#"{"tropo":[{"say":{"value":"hello"}},{"hangup":{}}]}"#
        );
    }
}
