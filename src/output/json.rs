//! JSON export of query results

use crate::models::QueryResult;
use crate::utils::ReportError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Serialize a result as indented JSON
pub fn to_json(result: &QueryResult) -> Result<String, ReportError> {
    serde_json::to_string_pretty(result).map_err(|e| ReportError::Serialize {
        message: e.to_string(),
    })
}

/// Print a result as JSON to stdout
pub fn print_json(result: &QueryResult) -> Result<(), ReportError> {
    println!("{}", to_json(result)?);
    Ok(())
}

/// Write `<base>.json`, creating or truncating it.
///
/// The extension is always appended, so `out` becomes `out.json` and
/// `out.json` becomes `out.json.json`. Returns the path written.
pub fn write_json_file(base: &Path, result: &QueryResult) -> Result<PathBuf, ReportError> {
    let mut name = base.as_os_str().to_os_string();
    name.push(".json");
    let path = PathBuf::from(name);

    let json = to_json(result)?;
    let write_error = |e: std::io::Error| ReportError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let mut file = File::create(&path).map_err(write_error)?;
    file.write_all(json.as_bytes()).map_err(write_error)?;
    file.write_all(b"\n").map_err(write_error)?;

    Ok(path)
}
