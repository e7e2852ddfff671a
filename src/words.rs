/***************************************/
/*          T I M E   W O R D S        */
/***************************************/

// The time of day spelled out in English, as shown by the word clock.

const DIGITS : [&str; 20] =
    [
        "zero", "one", "two", "three", "four",
        "five", "six", "seven", "eight", "nine",
        "ten", "eleven", "twelve", "thirteen", "fourteen",
        "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    ];

// "fourty" is what the marquee has always shown.
const TENS : [&str; 6] = ["", "ten", "twenty", "thirty", "fourty", "fifty"];

/// Spell out `n`, for 0 <= n < 60.
///
/// Values past the tens table fall back to digits.
pub fn word (n: u32) -> String
{
    if n < 20
    {
        return DIGITS[n as usize].to_string ();
    }

    let (t, d) = ((n / 10) as usize, (n % 10) as usize);
    match TENS.get (t)
    {
        Some (tens) if d == 0 => tens.to_string (),
        Some (tens)           => format! ("{}-{}", tens, DIGITS[d]),
        None                  => n.to_string (),
    }
}

/// The phrase for a wall-clock time, e.g.
/// "ten thirty-two and five seconds in the morning".
pub fn time_words (hour: u32, minute: u32, second: u32) -> String
{
    let h = if hour > 12 { hour - 12 } else { hour };

    let mut timestr = word (h);

    match minute
    {
        0      => timestr.push_str (" o'clock"),
        1..=9  => timestr.push_str (&format! (" oh {}", word (minute))),
        _      => timestr.push_str (&format! (" {}", word (minute))),
    }

    match second
    {
        0 => {}
        1 => timestr.push_str (" and one second"),
        _ => timestr.push_str (&format! (" and {} seconds", word (second))),
    }

    timestr.push_str (day_part (hour));
    timestr
}

fn day_part (hour: u32) -> &'static str
{
    if hour > 17
    {
        " in the evening"
    }
    else if hour > 11
    {
        " in the afternoon"
    }
    else
    {
        " in the morning"
    }
}

/// The full sentence sent to the marquee.
pub fn clock_message (hour: u32, minute: u32, second: u32) -> String
{
    format! ("It's {}.", time_words (hour, minute, second))
}
