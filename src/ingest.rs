use crate::error::ScopeResult;
use crate::shot::ShotRecord;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Read a session export. Rows that fail to deserialize are skipped with a
/// debug log rather than aborting the session; the monitor occasionally
/// leaves half-written rows when a shot is deleted mid-session.
pub fn load_shots<P: AsRef<Path>>(path: P) -> ScopeResult<Vec<ShotRecord>> {
    let file = File::open(path.as_ref())?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut shots = Vec::new();
    let mut skipped = 0usize;

    for (idx, result) in rdr.deserialize::<ShotRecord>().enumerate() {
        match result {
            Ok(shot) => shots.push(shot),
            Err(e) => {
                skipped += 1;
                // Header row is line 1, so data row idx maps to line idx + 2.
                debug!("line {}: unparseable shot row: {}", idx + 2, e);
            }
        }
    }

    if skipped > 0 {
        warn!("skipped {} unparseable rows", skipped);
    }

    Ok(shots)
}
