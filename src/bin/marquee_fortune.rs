use clap::Parser;
use marquee_clients::cli::FortuneArgs;
use marquee_clients::fortune::FortuneFile;
use marquee_clients::{FortuneHandler, MarqueeClient, MarqueeError, logging};
use std::process;
use tracing::{error, info};

///     FORTUNES
/// Shows a random line from a fortune file, in a random color,
/// whenever the marquee is ready.

fn main() {
    let args = FortuneArgs::parse();
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

fn run(args: &FortuneArgs) -> Result<(), MarqueeError> {
    // Missing or empty fortune files are fatal before touching the broker.
    let fortunes = FortuneFile::open(&args.fortune_file)?;
    info!("{} lines in fortune file {}", fortunes.line_count(), fortunes.name());

    let handler = FortuneHandler::new(fortunes, rand::rng());
    let mut client = MarqueeClient::new("fortune", &args.broker, handler)?;
    client.run()
}
