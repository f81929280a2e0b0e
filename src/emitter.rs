use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info, log_enabled, Level};
use tracing::instrument;

use crate::error::FixtureError;
use crate::model::NoteSequence;

/*
    Rendering of sequences as the play_notes tool reads them: pretty JSON, two-space indent,
    keys in declaration order.
 */

pub fn to_pretty_json(sequence: &NoteSequence) -> Result<String, FixtureError> {
    Ok(serde_json::to_string_pretty(sequence)?)
}

pub fn print_fixture<W: Write>(out: &mut W, sequence: &NoteSequence) -> Result<(), FixtureError> {
    let json = to_pretty_json(sequence)?;
    writeln!(out, "{}", json)?;

    if log_enabled!(Level::Debug) {
        match sequence.end_beat() {
            Ok(beats) => debug!("Printed {} notes spanning {} beats at {} bpm", sequence.notes.len(), beats, sequence.tempo),
            Err(e) => debug!("Printed {} notes, span unknown: {}", sequence.notes.len(), e),
        }
    }

    Ok(())
}

/*
    Plain overwrite of whatever is at path. No locking and no rename dance, so two runs at
    once will race and the last one wins. The handle is dropped before returning.
 */
#[instrument(skip(sequence))] // Enables extra logging for things that can go wrong in-call.
pub fn write_fixture(path: &Path, sequence: &NoteSequence) -> Result<(), FixtureError> {
    let json = to_pretty_json(sequence)?;

    let file = File::create(path).map_err(|e| FixtureError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(json.as_bytes()).map_err(|e| FixtureError::io(path, e))?;
    writer.flush().map_err(|e| FixtureError::io(path, e))?;

    info!("Wrote {} notes to {}", sequence.notes.len(), path.display());

    Ok(())
}

pub fn read_fixture(path: &Path) -> Result<NoteSequence, FixtureError> {
    let file = File::open(path).map_err(|e| FixtureError::io(path, e))?;
    let sequence = serde_json::from_reader(BufReader::new(file))?;
    Ok(sequence)
}
