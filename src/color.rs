/***************************************/
/*              C O L O R S            */
/***************************************/

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color, as understood by the marquee "set" topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb
{
    pub r : u8,
    pub g : u8,
    pub b : u8,
}

impl Rgb
{
    /// Convert an HSV color with components in [0, 1].
    /// Channels are floored, not rounded, when scaled to 0-255.
    pub fn from_hsv (hue: f64, saturation: f64, value: f64) -> Self
    {
        let (r, g, b) = hsv_to_rgb (hue, saturation, value);
        Self { r: scale (r), g: scale (g), b: scale (b) }
    }
}

fn scale (channel: f64) -> u8
{
    (channel.clamp (0.0, 1.0) * 255.0) as u8
}

/// Standard HSV to RGB conversion, all components in [0, 1].
pub fn hsv_to_rgb (h: f64, s: f64, v: f64) -> (f64, f64, f64)
{
    if s == 0.0
    {
        return (v, v, v);
    }

    let sector = (h * 6.0).floor ();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid (6)
    {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// A fully saturated, full brightness color with a uniformly random hue.
pub fn pick_color<R: Rng + ?Sized> (rng: &mut R) -> Rgb
{
    let hue : f64 = rng.random ();
    Rgb::from_hsv (hue, 1.0, 1.0)
}
