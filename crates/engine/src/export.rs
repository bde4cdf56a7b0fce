//! Handler for exporting reports as CSV.
//!
//! The layout is fixed: only the address column is wrapped in quotes and no
//! field is escaped, so a comma or quote inside another column produces a
//! malformed row. Consumers of `laporan.csv` rely on this exact shape.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::{EngineError, Report, ResultEngine};

/// Name of the file written by [`write_reports`].
pub const EXPORT_FILE_NAME: &str = "laporan.csv";

pub const HEADER: [&str; 8] = [
    "No",
    "Tanggal",
    "RT",
    "RW",
    "Detail Alamat",
    "Kategori",
    "Pelapor",
    "Gambar",
];

/// Serialize every report, ignoring any filter, to CSV text.
///
/// Rows are joined with `\n` and the payload has no trailing newline.
pub fn reports_csv(reports: &[Report]) -> ResultEngine<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);

    writer.write_record(HEADER)?;
    for report in reports {
        let id = report.id.to_string();
        let address = format!("\"{}\"", report.address);
        writer.write_record([
            id.as_str(),
            report.date.as_str(),
            report.rt.as_str(),
            report.rw.as_str(),
            address.as_str(),
            report.category.label(),
            report.reporter.as_str(),
            report.image_ref().unwrap_or(""),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|err| EngineError::Io(io::Error::new(err.error().kind(), err.to_string())))?;
    let mut payload = String::from_utf8(data)
        .map_err(|err| EngineError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))?;
    if payload.ends_with('\n') {
        payload.pop();
    }
    Ok(payload)
}

/// Write [`reports_csv`] to `dir/laporan.csv`, creating `dir` if needed.
/// Returns the written path.
pub fn write_reports(dir: &Path, reports: &[Report]) -> ResultEngine<PathBuf> {
    let payload = reports_csv(reports)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, payload)?;
    tracing::info!(path = %path.display(), rows = reports.len(), "reports exported");
    Ok(path)
}
