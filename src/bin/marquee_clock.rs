use clap::Parser;
use marquee_clients::cli::ClockArgs;
use marquee_clients::{ClockHandler, MarqueeClient, MarqueeError, logging};
use std::process;
use tracing::error;

///     WORD CLOCK
/// Shows the time written out in English whenever the marquee is ready.

fn main() {
    let args = ClockArgs::parse();
    logging::init();

    if let Err(err) = run(&args) {
        if err.is_connection_error() {
            error!("broker connection failed, exiting: {}", err);
        } else {
            error!("{}", err);
        }
        process::exit(1);
    }
}

fn run(args: &ClockArgs) -> Result<(), MarqueeError> {
    let mut client = MarqueeClient::new("clock", &args.broker, ClockHandler::local())?;
    client.run()
}
