/// MARQUEE NAMESPACE
/// Topic layout of a marquee node and the broker settings the clients share.

// MQTT topics. Every marquee lives under "marquee/<node>".
pub static TOPIC_PREFIX : &str = "marquee";
pub static TOPIC_READY  : &str = "ready";
pub static TOPIC_TEXT   : &str = "text";
pub static TOPIC_SET    : &str = "set";

// Fire and forget, like the display firmware itself.
pub static QUALITY_OF_SERVICE : i32 = 0;

// Broker defaults.
pub static DEFAULT_MQTT_SERVER : &str = "mqtt";
pub static DEFAULT_MQTT_PORT   : u16 = 1883;
pub static KEEP_ALIVE_SECS     : u64 = 60;
pub static CONNECT_TIMEOUT_SECS: u64 = 10;

// Size of the incoming message stream buffer.
pub static STREAM_BUFFER_SIZE : usize = 25;

///     FORTUNES
pub static DEFAULT_FORTUNE_FILE : &str = "fortunes.txt";

// Every fortune line starts with a two character marker.
pub static FORTUNE_PREFIX_CHARS : usize = 2;


/// The set of topics owned by a single marquee node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarqueeTopics
{
    base : String,
}

impl MarqueeTopics
{
    pub fn new (node: &str) -> Self
    {
        Self { base: format! ("{}/{}", TOPIC_PREFIX, node) }
    }

    pub fn base (&self) -> &str
    {
        &self.base
    }

    pub fn ready (&self) -> String
    {
        format! ("{}/{}", self.base, TOPIC_READY)
    }

    pub fn text (&self) -> String
    {
        format! ("{}/{}", self.base, TOPIC_TEXT)
    }

    pub fn set (&self) -> String
    {
        format! ("{}/{}", self.base, TOPIC_SET)
    }
}
