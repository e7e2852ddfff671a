/***************************************/
/*              E R R O R S            */
/***************************************/

use paho_mqtt as mqtt;
use thiserror::Error;

/// Everything that can go wrong while driving a marquee.
#[derive(Debug, Error)]
pub enum MarqueeError
{
    #[error("MQTT failed to connect to {server}: {source}")]
    Connect
    {
        server : String,
        #[source]
        source : mqtt::Error,
    },

    #[error("MQTT disconnected: {0}")]
    Disconnected(String),

    #[error("MQTT client error: {0}")]
    Mqtt(#[from] mqtt::Error),

    #[error("fortune file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fortune file {0} has no lines")]
    EmptyFortuneFile(String),

    #[error("line {index} requested but fortune file {name} only has {count} lines")]
    LineOutOfRange
    {
        name  : String,
        index : usize,
        count : usize,
    },

    #[error("failed to encode payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl MarqueeError
{
    /// True for the failures that end the broker session.
    pub fn is_connection_error (&self) -> bool
    {
        matches! (self, MarqueeError::Connect { .. } | MarqueeError::Disconnected(_))
    }
}
