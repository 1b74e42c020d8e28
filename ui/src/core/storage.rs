//! Read-only access to the report export left by the submission pipeline.
//!
//! Native builds look for `reports.json` in the per-user data directory; the
//! web build reads the `painel.reports` key from `localStorage`. Nothing here
//! ever writes.

use dioxus::logger::tracing::{debug, warn};

use super::report::{parse_reports, Report};

pub const REPORTS_FILE: &str = "reports.json";
pub const REPORTS_STORAGE_KEY: &str = "painel.reports";

/// Load the report export, if one exists.
///
/// `Ok(None)` means no export was found, which callers treat as "no data
/// supplied" rather than "no validated reports".
pub fn load_reports() -> Result<Option<Vec<Report>>, String> {
    let Some(raw) = read_export()? else {
        debug!("no report export found");
        return Ok(None);
    };
    let reports = parse_reports(&raw)?;
    debug!(count = reports.len(), "loaded report export");
    Ok(Some(reports))
}

/// Like [`load_reports`], but logs failures and degrades to "no data".
pub fn load_reports_or_none() -> Option<Vec<Report>> {
    load_reports().unwrap_or_else(|err| {
        warn!("Couldn't load reports: {err}");
        None
    })
}

#[cfg(target_arch = "wasm32")]
fn read_export() -> Result<Option<String>, String> {
    let storage = web_sys::window()
        .ok_or("Window unavailable")?
        .local_storage()
        .map_err(|_| "localStorage blocked".to_string())?
        .ok_or("localStorage unavailable")?;
    storage
        .get_item(REPORTS_STORAGE_KEY)
        .map_err(|_| "Failed reading localStorage".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_export() -> Result<Option<String>, String> {
    let path = export_path()?;
    read_file(&path)
}

#[cfg(not(target_arch = "wasm32"))]
fn export_path() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("org", "Painel", "Painel")
        .ok_or("Unable to determine data directory")?;
    Ok(dirs.data_dir().join(REPORTS_FILE))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_file(path: &std::path::Path) -> Result<Option<String>, String> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(format!("{}: {err}", path.display())),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_no_export() {
        let path = std::env::temp_dir().join("painel-does-not-exist/reports.json");
        assert_eq!(read_file(&path), Ok(None));
    }

    #[test]
    fn reads_existing_file() {
        let dir = std::env::temp_dir().join(format!("painel-storage-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(REPORTS_FILE);
        std::fs::write(&path, r#"[{"status": "pending"}]"#).unwrap();

        let raw = read_file(&path).unwrap().unwrap();
        let reports = parse_reports(&raw).unwrap();
        assert_eq!(reports.len(), 1);

        std::fs::remove_dir_all(&dir).ok();
    }
}
