use std::path::PathBuf;

use habitquest_core::DEFAULT_EXPORT_FILE;

use super::Session;

pub fn run(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open()?;
    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
    session.tracker.export().write_to(&path)?;
    println!("Exported to {}", path.display());
    Ok(())
}
