// tests/dispatch.rs
// End to end handling of ready messages, from the raw MQTT payload to the
// publishes a client makes in response, without a broker.

use std::io::Write;

use chrono::NaiveTime;
use marquee_clients::fortune::FortuneFile;
use marquee_clients::messages::{SetMessage, TextMessage};
use marquee_clients::{ClockHandler, FortuneHandler, MarqueeTopics, dispatch};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn ten_thirty_two () -> NaiveTime
{
    NaiveTime::from_hms_opt (10, 32, 0).unwrap ()
}

fn fruit_file () -> tempfile::NamedTempFile
{
    let mut tmp = tempfile::NamedTempFile::new ().unwrap ();
    write! (tmp, "1 apple\n2 banana\n3 cherry\n").unwrap ();
    tmp.flush ().unwrap ();
    tmp
}

#[test]
fn clock_answers_ready_with_one_text ()
{
    let topics = MarqueeTopics::new ("test");
    let mut handler = ClockHandler::with_clock (ten_thirty_two);

    let out = dispatch (&topics, &mut handler, "marquee/test/ready", br#"{"ready": true}"#).unwrap ();

    assert_eq! (out.len (), 1);
    assert_eq! (out[0].topic, "marquee/test/text");
    let body : TextMessage = serde_json::from_str (&out[0].payload).unwrap ();
    assert_eq! (body.text, "It's ten thirty-two in the morning.");
}

#[test]
fn clock_with_real_time_is_non_empty ()
{
    let topics = MarqueeTopics::new ("test");
    let mut handler = ClockHandler::local ();

    let out = dispatch (&topics, &mut handler, "marquee/test/ready", br#"{"ready": true}"#).unwrap ();

    assert_eq! (out.len (), 1);
    let body : TextMessage = serde_json::from_str (&out[0].payload).unwrap ();
    assert! (body.text.starts_with ("It's "));
    assert! (body.text.ends_with ('.'));
}

#[test]
fn not_ready_publishes_nothing ()
{
    let topics = MarqueeTopics::new ("test");
    let mut handler = ClockHandler::with_clock (ten_thirty_two);

    let out = dispatch (&topics, &mut handler, "marquee/test/ready", br#"{"ready": false}"#).unwrap ();
    assert! (out.is_empty ());
}

#[test]
fn fortune_answers_ready_with_color_then_text ()
{
    let tmp = fruit_file ();
    let fortunes = FortuneFile::open (tmp.path ().to_str ().unwrap ()).unwrap ();
    let topics = MarqueeTopics::new ("test");
    let mut handler = FortuneHandler::new (fortunes, StdRng::seed_from_u64 (42));

    for _ in 0..10
    {
        let out = dispatch (&topics, &mut handler, "marquee/test/ready", br#"{"ready": true}"#).unwrap ();
        assert_eq! (out.len (), 2);

        assert_eq! (out[0].topic, "marquee/test/set");
        let set : SetMessage = serde_json::from_str (&out[0].payload).unwrap ();
        let c = set.color;
        assert_eq! (c.r.max (c.g).max (c.b), 255);

        assert_eq! (out[1].topic, "marquee/test/text");
        let text : TextMessage = serde_json::from_str (&out[1].payload).unwrap ();
        assert! (["apple", "banana", "cherry"].contains (&text.text.as_str ()), "{}", text.text);
    }
}

#[test]
fn fortune_not_ready_publishes_nothing ()
{
    let tmp = fruit_file ();
    let fortunes = FortuneFile::open (tmp.path ().to_str ().unwrap ()).unwrap ();
    let topics = MarqueeTopics::new ("test");
    let mut handler = FortuneHandler::new (fortunes, StdRng::seed_from_u64 (42));

    let out = dispatch (&topics, &mut handler, "marquee/test/ready", br#"{"ready": false}"#).unwrap ();
    assert! (out.is_empty ());
}

#[test]
fn fortune_index_one_is_banana ()
{
    let tmp = fruit_file ();
    let mut fortunes = FortuneFile::open (tmp.path ().to_str ().unwrap ()).unwrap ();
    assert_eq! (fortunes.fortune (1).unwrap (), "banana");
}
