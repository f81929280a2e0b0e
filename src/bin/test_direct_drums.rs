use std::io;

use drum_fixtures::{config, scenarios, FixtureError};
use simple_logger::SimpleLogger;

/*
    Prints the plain drum sequence and leaves a copy of it in the temp dir.
 */
fn main() -> Result<(), FixtureError> {
    SimpleLogger::new().with_level(config::LOG_LEVEL).init()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    scenarios::direct_drums(&mut out, &config::direct_drums_path())
}
