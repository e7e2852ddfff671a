/***************************************/
/*             L O G G I N G           */
/***************************************/

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Log to stderr, `info` and up unless RUST_LOG says otherwise.
pub fn init ()
{
    let env_filter = EnvFilter::try_from_default_env ()
        .unwrap_or_else (|_| EnvFilter::new ("info"));

    // Ignore a second initialisation, e.g. from tests.
    let _ = tracing_subscriber::registry ()
        .with (fmt::layer ().with_writer (std::io::stderr))
        .with (env_filter)
        .try_init ();
}
