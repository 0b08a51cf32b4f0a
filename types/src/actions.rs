mod ask;
mod call;
mod choices;
mod conference;
mod hangup;
mod message;
mod on;
mod record;
mod redirect;
mod reject;
mod say;
mod start_recording;
mod stop_recording;
mod transfer;

pub use ask::Ask;
pub use call::Call;
pub use choices::Choices;
pub use conference::Conference;
pub use hangup::Hangup;
pub use message::Message;
pub use on::On;
pub use record::Record;
pub use redirect::Redirect;
pub use reject::Reject;
pub use say::{Say, SayParams};
pub use start_recording::StartRecording;
pub use stop_recording::StopRecording;
pub use transfer::{Transfer, TransferChoices};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Error;

/// A parameter object with a fixed wire name and a fixed, ordered set of
/// accepted keys.
pub trait ActionParams: Serialize + DeserializeOwned {
    /// The key this object is rendered under.
    const NAME: &'static str;

    /// Accepted keys in rendering order, required keys first.
    const OPTIONS: &'static [&'static str];

    /// Builds the object from a loose mapping of named options.
    ///
    /// Keys outside [`Self::OPTIONS`] are dropped. Bare strings given for
    /// `say` or `choices` are promoted to their object form.
    fn from_options(options: Value) -> Result<Self, Error> {
        let options = retain_options(Self::NAME, Self::OPTIONS, options)?;
        serde_json::from_value(options).map_err(|source| Error::InvalidOptions {
            action: Self::NAME,
            source,
        })
    }
}

/// Keeps only the whitelisted keys of `options`, in whitelist order.
pub(crate) fn retain_options(
    action: &'static str,
    whitelist: &[&str],
    options: Value,
) -> Result<Value, Error> {
    let mut supplied = match options {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => {
            return Err(Error::UnsupportedShape {
                field: "options",
                expected: "a mapping of option names to values",
            })
        }
    };

    let mut retained = Map::new();
    for name in whitelist {
        if let Some(value) = supplied.remove(*name) {
            retained.insert(name.to_string(), value);
        }
    }
    for dropped in supplied.keys() {
        tracing::debug!(action, option = %dropped, "dropping unrecognized option");
    }

    Ok(Value::Object(retained))
}

/// One or more addresses an action is directed at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Destination {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for Destination {
    fn from(to: &str) -> Self {
        Destination::One(to.to_string())
    }
}

impl From<String> for Destination {
    fn from(to: String) -> Self {
        Destination::One(to)
    }
}

impl From<Vec<String>> for Destination {
    fn from(to: Vec<String>) -> Self {
        Destination::Many(to)
    }
}

impl From<Vec<&str>> for Destination {
    fn from(to: Vec<&str>) -> Self {
        Destination::Many(to.into_iter().map(str::to_string).collect())
    }
}

/// A duration in seconds. Whole numbers stay integers on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seconds {
    Whole(i64),
    Fractional(f64),
}

impl From<i32> for Seconds {
    fn from(seconds: i32) -> Self {
        Seconds::Whole(seconds.into())
    }
}

impl From<i64> for Seconds {
    fn from(seconds: i64) -> Self {
        Seconds::Whole(seconds)
    }
}

impl From<u32> for Seconds {
    fn from(seconds: u32) -> Self {
        Seconds::Whole(seconds.into())
    }
}

impl From<f64> for Seconds {
    fn from(seconds: f64) -> Self {
        Seconds::Fractional(seconds)
    }
}

/// A single protocol instruction, rendered as `{ "<name>": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "ask")]
    Ask(Ask),
    #[serde(rename = "call")]
    Call(Call),
    #[serde(rename = "conference")]
    Conference(Conference),
    #[serde(rename = "hangup")]
    Hangup(Hangup),
    #[serde(rename = "message")]
    Message(Message),
    #[serde(rename = "on")]
    On(On),
    #[serde(rename = "record")]
    Record(Record),
    #[serde(rename = "redirect")]
    Redirect(Redirect),
    #[serde(rename = "reject")]
    Reject(Reject),
    #[serde(rename = "say")]
    Say(Say),
    #[serde(rename = "startRecording")]
    StartRecording(StartRecording),
    #[serde(rename = "stopRecording")]
    StopRecording(StopRecording),
    #[serde(rename = "transfer")]
    Transfer(Transfer),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Ask(_) => Ask::NAME,
            Action::Call(_) => Call::NAME,
            Action::Conference(_) => Conference::NAME,
            Action::Hangup(_) => Hangup::NAME,
            Action::Message(_) => Message::NAME,
            Action::On(_) => On::NAME,
            Action::Record(_) => Record::NAME,
            Action::Redirect(_) => Redirect::NAME,
            Action::Reject(_) => Reject::NAME,
            Action::Say(_) => Say::NAME,
            Action::StartRecording(_) => StartRecording::NAME,
            Action::StopRecording(_) => StopRecording::NAME,
            Action::Transfer(_) => Transfer::NAME,
        }
    }

    /// Builds the action registered under `name` from a mapping of options.
    pub fn from_options(name: &str, options: Value) -> Result<Self, Error> {
        Ok(match name {
            "ask" => Action::Ask(Ask::from_options(options)?),
            "call" => Action::Call(Call::from_options(options)?),
            "conference" => Action::Conference(Conference::from_options(options)?),
            "hangup" => Action::Hangup(Hangup::from_options(options)?),
            "message" => Action::Message(Message::from_options(options)?),
            "on" => Action::On(On::from_options(options)?),
            "record" => Action::Record(Record::from_options(options)?),
            "redirect" => Action::Redirect(Redirect::from_options(options)?),
            "reject" => Action::Reject(Reject::from_options(options)?),
            "say" => Action::Say(Say::from_options(options)?),
            "startRecording" => Action::StartRecording(StartRecording::from_options(options)?),
            "stopRecording" => Action::StopRecording(StopRecording::from_options(options)?),
            "transfer" => Action::Transfer(Transfer::from_options(options)?),
            _ => return Err(Error::UnknownAction(name.to_string())),
        })
    }
}

impl From<Ask> for Action {
    fn from(ask: Ask) -> Self {
        Action::Ask(ask)
    }
}

impl From<Call> for Action {
    fn from(call: Call) -> Self {
        Action::Call(call)
    }
}

impl From<Conference> for Action {
    fn from(conference: Conference) -> Self {
        Action::Conference(conference)
    }
}

impl From<Hangup> for Action {
    fn from(hangup: Hangup) -> Self {
        Action::Hangup(hangup)
    }
}

impl From<Message> for Action {
    fn from(message: Message) -> Self {
        Action::Message(message)
    }
}

impl From<On> for Action {
    fn from(on: On) -> Self {
        Action::On(on)
    }
}

impl From<Record> for Action {
    fn from(record: Record) -> Self {
        Action::Record(record)
    }
}

impl From<Redirect> for Action {
    fn from(redirect: Redirect) -> Self {
        Action::Redirect(redirect)
    }
}

impl From<Reject> for Action {
    fn from(reject: Reject) -> Self {
        Action::Reject(reject)
    }
}

impl From<Say> for Action {
    fn from(say: Say) -> Self {
        Action::Say(say)
    }
}

impl From<StartRecording> for Action {
    fn from(start_recording: StartRecording) -> Self {
        Action::StartRecording(start_recording)
    }
}

impl From<StopRecording> for Action {
    fn from(stop_recording: StopRecording) -> Self {
        Action::StopRecording(stop_recording)
    }
}

impl From<Transfer> for Action {
    fn from(transfer: Transfer) -> Self {
        Action::Transfer(transfer)
    }
}
