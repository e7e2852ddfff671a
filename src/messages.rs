/**********************************/
/*      MARQUEE MQTT PAYLOADS     */
/**********************************/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Rgb;
use crate::error::MarqueeError;

/// Published by the marquee on `<base>/ready`.
///
/// Any JSON value is accepted for `ready`; it is judged by truthiness
/// and a missing field counts as not ready.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadyMessage
{
    #[serde(default)]
    pub ready : Value,
}

impl ReadyMessage
{
    pub fn parse (payload: &[u8]) -> Result<Self, MarqueeError>
    {
        Ok (serde_json::from_slice (payload)?)
    }

    pub fn is_ready (&self) -> bool
    {
        is_truthy (&self.ready)
    }
}

fn is_truthy (value: &Value) -> bool
{
    match value
    {
        Value::Null       => false,
        Value::Bool (b)   => *b,
        Value::Number (n) => n.as_f64 ().is_some_and (|f| f != 0.0),
        Value::String (s) => !s.is_empty (),
        Value::Array (a)  => !a.is_empty (),
        Value::Object (o) => !o.is_empty (),
    }
}

/// Sent to `<base>/text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMessage
{
    pub text : String,
}

/// Sent to `<base>/set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetMessage
{
    pub color : Rgb,
}

/// A publish waiting to go out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing
{
    pub topic   : String,
    pub payload : String,
}

impl Outgoing
{
    pub fn json<T: Serialize> (topic: String, body: &T) -> Result<Self, MarqueeError>
    {
        Ok (Self { topic, payload: serde_json::to_string (body)? })
    }
}
