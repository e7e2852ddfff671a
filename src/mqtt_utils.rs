/**********************************/
/*       UTILITIES FOR MQTT       */
/**********************************/

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::{executor::block_on, stream::StreamExt};
use paho_mqtt::{self as mqtt, MQTT_VERSION_5};
use tracing::{debug, info, warn};

use crate::cli::BrokerArgs;
use crate::config::{self, MarqueeTopics};
use crate::error::MarqueeError;
use crate::handler::{self, ReadyHandler};
use crate::messages::Outgoing;

/// One marquee client: a broker connection plus the handler that decides
/// what to show. The handler lives exactly as long as the connection.
pub struct MarqueeClient<H>
{
    client            : mqtt::AsyncClient,
    server            : String,
    conn_opts         : mqtt::ConnectOptions,
    topics            : MarqueeTopics,
    handler           : H,

    /// Reason code of the last broker initiated disconnect.
    disconnect_reason : Arc<Mutex<Option<String>>>,
}

impl<H: ReadyHandler> MarqueeClient<H>
{
    pub fn new (utility: &str, args: &BrokerArgs, handler: H) -> Result<Self, MarqueeError>
    {
        let server = args.server_uri ();
        let client_id = format! ("marquee-{}-{}", utility, args.marquee_node);

        let create_opts = mqtt::CreateOptionsBuilder::new ()
            .server_uri (server.clone ())
            .client_id (client_id)
            .finalize ();

        let client = mqtt::AsyncClient::new (create_opts)?;

        let disconnect_reason = Arc::new (Mutex::new (None));
        let reason_slot = Arc::clone (&disconnect_reason);
        client.set_disconnected_callback (move |_, _props, reason|
            {
                warn! ("server disconnected with reason: {}", reason);
                if let Ok (mut slot) = reason_slot.lock ()
                {
                    *slot = Some (reason.to_string ());
                }
            }
        );

        let mut conn_opts = mqtt::ConnectOptionsBuilder::with_mqtt_version (MQTT_VERSION_5);
        conn_opts
            .clean_start (true)
            .keep_alive_interval (Duration::from_secs (config::KEEP_ALIVE_SECS))
            .connect_timeout (Duration::from_secs (config::CONNECT_TIMEOUT_SECS));
        if let Some ((user, pass)) = args.credentials ()
        {
            conn_opts.user_name (user);
            if let Some (pass) = pass
            {
                conn_opts.password (pass);
            }
        }

        Ok (Self
        {
            client,
            server,
            conn_opts: conn_opts.finalize (),
            topics: args.topics (),
            handler,
            disconnect_reason,
        })
    }

    /// Connect, subscribe to the ready topic and serve ready messages
    /// until the connection goes away. Only ever returns an error.
    pub fn run (&mut self) -> Result<(), MarqueeError>
    {
        block_on (async
            {
                // Get message stream before connecting.
                let mut strm = self.client.get_stream (config::STREAM_BUFFER_SIZE);

                // Make the connection to the broker.
                self.client.connect (self.conn_opts.clone ()).await
                    .map_err (|source| MarqueeError::Connect { server: self.server.clone (), source })?;
                info! (server = %self.server, marquee = self.topics.base (), "connected");

                let ready_topic = self.topics.ready ();
                self.client.subscribe (ready_topic.as_str (), config::QUALITY_OF_SERVICE).await?;
                info! (topic = %ready_topic, "waiting for the marquee");

                // Just loop on incoming messages.
                while let Some (msg_opt) = strm.next ().await
                {
                    let Some (msg) = msg_opt else
                    {
                        // A None on the stream means the connection is gone.
                        return Err (MarqueeError::Disconnected (self.disconnect_reason ()));
                    };

                    debug! (topic = msg.topic (), "message ARRIVED");

                    let outgoing = handler::dispatch (&self.topics,
                                                      &mut self.handler,
                                                      msg.topic (),
                                                      msg.payload ())?;
                    for out in outgoing
                    {
                        self.publish (out).await?;
                    }
                }

                Err (MarqueeError::Disconnected ("message stream closed".to_string ()))
            })
    }

    /// The broker's reason if it gave one, otherwise a lost connection.
    fn disconnect_reason (&self) -> String
    {
        self.disconnect_reason
            .lock ()
            .ok ()
            .and_then (|mut slot| slot.take ())
            .unwrap_or_else (|| "connection lost".to_string ())
    }

    async fn publish (&self, out: Outgoing) -> Result<(), MarqueeError>
    {
        debug! (topic = %out.topic, payload = %out.payload, "publishing");
        let msg = mqtt::Message::new (out.topic, out.payload, config::QUALITY_OF_SERVICE);
        self.client.publish (msg).await?;
        Ok (())
    }
}
