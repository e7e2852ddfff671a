/***************************************/
/*     C O M M A N D   L I N E         */
/***************************************/

use clap::{Args, Parser};

use crate::config::{self, MarqueeTopics};

/// Broker and marquee selection, shared by every client.
#[derive(Debug, Clone, Args)]
pub struct BrokerArgs
{
    /// MQTT marquee node name
    #[arg(long = "marquee_node", env = "MARQUEE_NODE")]
    pub marquee_node : String,

    /// MQTT server name, or a full server URI
    #[arg(long = "mqtt_server", env = "MQTT_SERVER", default_value = config::DEFAULT_MQTT_SERVER)]
    pub mqtt_server  : String,

    /// MQTT server port, unless given in the server URI
    #[arg(long = "mqtt_port", env = "MQTT_PORT", default_value_t = config::DEFAULT_MQTT_PORT)]
    pub mqtt_port    : u16,

    /// MQTT auth user name
    #[arg(long = "mqtt_user", env = "MQTT_USER")]
    pub mqtt_user    : Option<String>,

    /// MQTT auth password
    #[arg(long = "mqtt_pass", env = "MQTT_PASS", hide_env_values = true)]
    pub mqtt_pass    : Option<String>,
}

impl BrokerArgs
{
    pub fn topics (&self) -> MarqueeTopics
    {
        MarqueeTopics::new (&self.marquee_node)
    }

    /// A bare host name becomes `tcp://<host>:<port>`.
    pub fn server_uri (&self) -> String
    {
        if self.mqtt_server.contains ("://")
        {
            self.mqtt_server.clone ()
        }
        else
        {
            format! ("tcp://{}:{}", self.mqtt_server, self.mqtt_port)
        }
    }

    /// User and password, only when a user was given.
    pub fn credentials (&self) -> Option<(&str, Option<&str>)>
    {
        self.mqtt_user
            .as_deref ()
            .filter (|user| !user.is_empty ())
            .map (|user| (user, self.mqtt_pass.as_deref ()))
    }
}

#[derive(Debug, Parser)]
#[command(name = "marquee_clock", about = "Shows the time written out in English.")]
pub struct ClockArgs
{
    #[command(flatten)]
    pub broker : BrokerArgs,
}

#[derive(Debug, Parser)]
#[command(name = "marquee_fortune", about = "Shows random lines from a fortune file.")]
pub struct FortuneArgs
{
    /// Fortune file name
    #[arg(long = "fortune_file", env = "FORTUNE_FILE", default_value = config::DEFAULT_FORTUNE_FILE)]
    pub fortune_file : String,

    #[command(flatten)]
    pub broker       : BrokerArgs,
}
