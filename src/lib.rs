/*****************************************/
/*         M A R Q U E E   C L I E N T S */
/*****************************************/

// MQTT clients that put text on a marquee sign once it reports ready.

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod fortune;
pub mod handler;
pub mod logging;
pub mod messages;
pub mod mqtt_utils;
pub mod words;

pub use config::MarqueeTopics;
pub use error::MarqueeError;
pub use handler::{ClockHandler, FortuneHandler, ReadyHandler, dispatch};
pub use mqtt_utils::MarqueeClient;
