use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// The requested output path, or `default_name` in the current directory.
pub fn output_path(requested: Option<&Path>, default_name: &str) -> PathBuf {
    requested
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_name))
}

/// Writes a rendered worksheet, creating missing parent directories.
pub fn write_worksheet(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    info!("Wrote {} bytes to {:?}", bytes.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_name_is_used_without_request() {
        assert_eq!(output_path(None, "Zuordnen.docx"), PathBuf::from("Zuordnen.docx"));
        assert_eq!(
            output_path(Some(Path::new("out/a.docx")), "Zuordnen.docx"),
            PathBuf::from("out/a.docx")
        );
    }

    #[test]
    fn parent_directories_are_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Klasse 6").join("Vokabelliste.docx");
        write_worksheet(&path, b"PK").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"PK");
    }
}
