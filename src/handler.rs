/***************************************/
/*         R E A D Y   H A N D L E R   */
/***************************************/

// What to show once a marquee reports it is ready. Handlers only build
// the publishes; the MQTT loop sends them in order, so each ready
// message is handled to completion before the next one is read.

use chrono::{Local, NaiveTime, Timelike};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::color;
use crate::config::MarqueeTopics;
use crate::error::MarqueeError;
use crate::fortune::FortuneFile;
use crate::messages::{Outgoing, ReadyMessage, SetMessage, TextMessage};
use crate::words;

pub trait ReadyHandler
{
    /// The publishes to make for one ready signal, in order.
    fn on_ready (&mut self, topics: &MarqueeTopics) -> Result<Vec<Outgoing>, MarqueeError>;
}

/// Route one incoming message.
///
/// Only a truthy `ready` on `<base>/ready` produces anything; a marquee
/// that is not ready must not get updates queued up for it.
pub fn dispatch<H: ReadyHandler + ?Sized> (topics  : &MarqueeTopics,
                                          handler : &mut H,
                                          topic   : &str,
                                          payload : &[u8]) -> Result<Vec<Outgoing>, MarqueeError>
{
    if topic != topics.ready ()
    {
        warn! (topic, "ignoring message on unexpected topic");
        return Ok (Vec::new ());
    }

    let ready = match ReadyMessage::parse (payload)
    {
        Ok (msg) => msg,
        Err (err) =>
            {
                warn! (%err, payload = %String::from_utf8_lossy (payload), "malformed ready message");
                return Ok (Vec::new ());
            }
    };

    if !ready.is_ready ()
    {
        debug! (topic, "marquee not ready");
        return Ok (Vec::new ());
    }

    handler.on_ready (topics)
}


/// Shows the time of day in words.
pub struct ClockHandler
{
    now : fn () -> NaiveTime,
}

impl ClockHandler
{
    /// Uses the local wall clock.
    pub fn local () -> Self
    {
        Self { now: || Local::now ().time () }
    }

    pub fn with_clock (now: fn () -> NaiveTime) -> Self
    {
        Self { now }
    }
}

impl ReadyHandler for ClockHandler
{
    fn on_ready (&mut self, topics: &MarqueeTopics) -> Result<Vec<Outgoing>, MarqueeError>
    {
        let now = (self.now) ();
        let message = words::clock_message (now.hour (), now.minute (), now.second ());
        info! (%message, "showing time");

        Ok (vec! [Outgoing::json (topics.text (), &TextMessage { text: message })?])
    }
}


/// Shows a random fortune in a random color.
pub struct FortuneHandler<R, G>
{
    fortunes : FortuneFile<R>,
    rng      : G,
}

impl<R, G> FortuneHandler<R, G>
where
    R: std::io::Read + std::io::Seek,
    G: Rng,
{
    pub fn new (fortunes: FortuneFile<R>, rng: G) -> Self
    {
        Self { fortunes, rng }
    }
}

impl<R, G> ReadyHandler for FortuneHandler<R, G>
where
    R: std::io::Read + std::io::Seek,
    G: Rng,
{
    fn on_ready (&mut self, topics: &MarqueeTopics) -> Result<Vec<Outgoing>, MarqueeError>
    {
        let index = self.fortunes.pick_index (&mut self.rng);
        let text = self.fortunes.fortune (index)?;
        info! (line = index, %text, "chose fortune");

        let color = color::pick_color (&mut self.rng);

        // Color first, so the text never shows up in the old color.
        Ok (vec!
            [
                Outgoing::json (topics.set (), &SetMessage { color })?,
                Outgoing::json (topics.text (), &TextMessage { text })?,
            ])
    }
}
