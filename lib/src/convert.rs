use crate::config::Config;
use crate::error::Result;
use crate::import_export::{
    parse_bookmarks_file, read_intermediate_file, BookmarkExporter, IntermediateJsonExporter,
    RaindropExporter,
};
use crate::models::BookmarkRecord;
use crate::utils::staging_dir;
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// What a conversion run produced
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub records: usize,
    pub collection: String,
    pub intermediate: PathBuf,
    pub output: PathBuf,
}

/// Run the whole conversion: parse the export, then write the intermediate JSON and
/// the Raindrop HTML.
///
/// Both documents are rendered and staged before either destination is replaced, so
/// a failure leaves existing outputs untouched.
pub fn convert(config: &Config) -> Result<ConversionSummary> {
    info!("Reading bookmarks from {}", config.input.display());
    let bookmarks = parse_bookmarks_file(&config.input, &config.import_options())?;
    let records = bookmarks.into_records();
    info!("Parsed {} unique bookmark(s)", records.len());

    let raindrop = RaindropExporter {
        collection: config.collection.clone(),
    };
    let staged = [
        stage(&IntermediateJsonExporter, &records, &config.intermediate)?,
        stage(&raindrop, &records, &config.output)?,
    ];
    for (file, dest) in staged {
        file.persist(&dest)?;
        debug!("Wrote {}", dest.display());
    }

    Ok(ConversionSummary {
        records: records.len(),
        collection: config.collection.clone(),
        intermediate: config.intermediate.clone(),
        output: config.output.clone(),
    })
}

/// Render a previously written intermediate JSON file into Raindrop HTML
pub fn render_intermediate(intermediate: &Path, output: &Path, collection: &str) -> Result<usize> {
    let records = read_intermediate_file(intermediate)?;
    let exporter = RaindropExporter {
        collection: collection.to_string(),
    };
    let (file, dest) = stage(&exporter, &records, output)?;
    file.persist(&dest)?;
    Ok(records.len())
}

/// Render into a temp file next to `dest`
fn stage(
    exporter: &dyn BookmarkExporter,
    records: &[BookmarkRecord],
    dest: &Path,
) -> Result<(NamedTempFile, PathBuf)> {
    let document = exporter.render(records)?;
    let mut file = NamedTempFile::new_in(staging_dir(dest))?;
    file.write_all(document.as_bytes())?;
    file.flush()?;
    Ok((file, dest.to_path_buf()))
}
