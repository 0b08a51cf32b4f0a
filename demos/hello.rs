use tropo_webapi::types::actions::{Ask, Choices, On, Say};
use tropo_webapi::types::consts::Event;
use tropo_webapi::types::{InboundResult, InboundSession};
use tropo_webapi::{Config, Tropo};

const SESSION: &str = r#"{"session":{"id":"89b3ab2b","accountId":"33932","callId":"1a2b3c","userType":"HUMAN","initialText":null,"to":{"id":"4155551212","channel":"VOICE","network":"PSTN"},"from":{"id":"4155550000","channel":"VOICE","network":"PSTN"}}}"#;

const RESULT: &str = r#"{"result":{"actions":{"name":"zip","attempts":1,"disposition":"SUCCESS","confidence":100,"interpretation":"94107","utterance":"9 4 1 0 7"},"complete":true,"error":null,"sequence":1,"sessionDuration":12,"sessionId":"89b3ab2b","state":"ANSWERED"}}"#;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv_override().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let session = InboundSession::from_json(SESSION)?;
    println!("New session {} from {:?}", session.id().unwrap_or("?"), session.from().and_then(|f| f.id));

    let mut tropo = Tropo::with_config(Config::from_env()?);
    tropo.say("Welcome to the weather line.");
    tropo.on(On::new(Event::Continue).with_next("/weather"));
    tropo.ask(
        Ask::new(Choices::new("[5 DIGITS]").with_mode("dtmf"))
            .with_say("Please enter your five digit zip code.")
            .with_attempts(3)
            .with_bargein(true)
            .with_name("zip")
            .with_timeout(5.0),
    );
    println!("{}", tropo.render_pretty(true)?);

    let result = InboundResult::from_json(RESULT)?;
    println!("Caller entered {}", result.value()?.as_str().unwrap_or_default());

    let mut tropo = Tropo::with_config(Config::from_env()?);
    tropo.say(Say::new("94107").with_as("DIGITS"));
    tropo.hangup();
    println!("{}", tropo.render()?);

    Ok(())
}
