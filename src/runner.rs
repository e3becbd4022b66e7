use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::{
    clock::Clock,
    csv_utils::{read_csv, write_csv},
    dto::{CommandRow, TransactionRow},
    Engine,
};

/// Replays a CSV command log against an empty store and writes the resulting transactions.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing add/update/delete commands
/// * `writer` - Where to write the stored transactions (e.g. stdout)
/// * `clock` - Reference time for rejecting future-dated additions
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, W, C>(input_path: P, writer: W, clock: C) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
    C: Clock,
{
    let mut engine = Engine::new(clock);
    let mut applied = 0usize;
    let mut rejected = 0usize;

    let rows = read_csv::<CommandRow, _>(input_path)?;
    for (line, row) in rows.enumerate() {
        // CSV parsing errors are critical - propagate them
        let row = row?;
        let id = row.id;
        let cmd_type = row.cmd_type;
        // Rejected commands leave the store untouched and are skipped
        match engine.process_command(row) {
            Ok(()) => applied += 1,
            Err(err) => {
                rejected += 1;
                tracing::warn!(record = line + 1, id, ?cmd_type, %err, "ignoring command");
            }
        }
    }

    tracing::info!(applied, rejected, "finished replaying commands");

    write_csv(writer, engine.transactions().map(TransactionRow::from))?;
    Ok(())
}
