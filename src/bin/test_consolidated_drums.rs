use std::io;

use drum_fixtures::{config, scenarios, FixtureError};
use simple_logger::SimpleLogger;

// Prints the basic and the effects-laden drum sequences, one after the other
fn main() -> Result<(), FixtureError> {
    SimpleLogger::new().with_level(config::LOG_LEVEL).init()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    scenarios::consolidated_drums(&mut out)
}
