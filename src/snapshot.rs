use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::model::Booking;

/// Durable snapshot of the full booking collection, stored as a JSON array.
///
/// Written whole on every mutation: serialize to a temp file, flush + fsync,
/// then atomically rename over the previous snapshot so a crash mid-write
/// never leaves a half-written file behind.
pub fn save(path: &Path, bookings: &[Booking]) -> io::Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    let file = File::create(&tmp_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, bookings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    fs::rename(&tmp_path, path)
}

/// Load a previously saved collection.
///
/// A missing file, an unparseable file, or an empty array all return `None` —
/// the caller falls back to seed data rather than treating any of these as an
/// error.
pub fn load(path: &Path) -> Option<Vec<Booking>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("snapshot at {} unreadable: {e}", path.display());
            return None;
        }
    };
    match serde_json::from_reader::<_, Vec<Booking>>(BufReader::new(file)) {
        Ok(bookings) if bookings.is_empty() => None,
        Ok(bookings) => Some(bookings),
        Err(e) => {
            warn!("snapshot at {} failed to parse, using seed data: {e}", path.display());
            None
        }
    }
}
