pub mod actions;
pub mod coerce;
pub mod consts;
pub mod inbound;
mod envelope;
mod error;

pub use actions::{Action, ActionParams, Destination, Seconds};
pub use coerce::{Canonical, StringOrPrebuilt};
pub use envelope::Envelope;
pub use error::Error;
pub use inbound::{ActionOutcome, Endpoint, InboundResult, InboundSession};
