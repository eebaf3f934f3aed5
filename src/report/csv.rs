use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Library, LibraryCatalog};

/// Fixed header line. Its column order predates this tool and does not match
/// the data-row order (copyrights and repository are swapped); downstream
/// consumers parse rows positionally, so it stays as is.
pub const HEADER: &str = "component_name;license_title;license_url;public_repository;copyrights";

/// Write one variant's CSV report, truncating any existing file.
///
/// Returns the number of library rows written. An unresolvable license
/// reference aborts mid-file: rows already written stay on disk.
pub fn render(catalog: &LibraryCatalog, out: &Path) -> Result<usize> {
    let file =
        File::create(out).with_context(|| format!("cannot create report {}", out.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", HEADER)?;
    for lib in &catalog.libraries {
        writeln!(writer, "{}", row(catalog, lib)?)?;
    }
    writer.flush()?;

    Ok(catalog.libraries.len())
}

/// Format one library as a semicolon-delimited row.
///
/// Only the copyrights field is quoted, always and without escaping. License
/// name and url each collapse to a single space when the library declares no
/// licenses.
pub fn row(catalog: &LibraryCatalog, lib: &Library) -> Result<String> {
    let license = catalog.first_license(lib)?;
    let (license_name, license_url) = match license {
        Some(l) => (l.name.as_str(), l.url.as_str()),
        None => (" ", " "),
    };

    Ok(format!(
        "{};{};{};\"{}\";{}",
        lib.name,
        license_name,
        license_url,
        lib.copyrights(),
        lib.repository_url()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn catalog(json: &str) -> LibraryCatalog {
        serde_json::from_str(json).unwrap()
    }

    const GSON: &str = r#"{
        "libraries": [{
            "name": "Gson",
            "licenses": ["apache2"],
            "developers": [{"name": "Google"}],
            "scm": {"url": "https://github.com/google/gson"}
        }],
        "licenses": {
            "apache2": {"name": "Apache 2.0", "url": "https://apache.org/licenses/2.0"}
        }
    }"#;

    #[test]
    fn test_row_fully_populated() {
        let cat = catalog(GSON);
        assert_eq!(
            row(&cat, &cat.libraries[0]).unwrap(),
            "Gson;Apache 2.0;https://apache.org/licenses/2.0;\"Google\";https://github.com/google/gson"
        );
    }

    #[test]
    fn test_row_bare_library() {
        let cat = catalog(r#"{"libraries": [{"name": "Lib"}], "licenses": {}}"#);
        assert_eq!(row(&cat, &cat.libraries[0]).unwrap(), "Lib; ; ;\" \";");
    }

    #[test]
    fn test_row_dangling_license_errors() {
        let cat = catalog(
            r#"{"libraries": [{"name": "Broken", "licenses": ["gone"]}], "licenses": {}}"#,
        );
        assert!(row(&cat, &cat.libraries[0]).is_err());
    }

    #[test]
    fn test_render_header_and_row_count() {
        let cat = catalog(
            r#"{
                "libraries": [
                    {"name": "A", "licenses": ["mit"]},
                    {"name": "B"},
                    {"name": "C", "licenses": ["mit"]}
                ],
                "licenses": {"mit": {"name": "MIT", "url": "https://mit"}}
            }"#,
        );
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("licenses_fossNormalRelease_appning.csv");

        let written = render(&cat, &out).unwrap();
        assert_eq!(written, 3);

        let content = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "A;MIT;https://mit;\" \";");
        assert_eq!(lines[2], "B; ; ;\" \";");
    }

    #[test]
    fn test_render_truncates_existing_file() {
        let cat = catalog(r#"{"libraries": [], "licenses": {}}"#);
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.csv");
        std::fs::write(&out, "stale content\nmore stale\n").unwrap();

        render(&cat, &out).unwrap();
        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content, format!("{}\n", HEADER));
    }

    #[test]
    fn test_render_idempotent_bytes() {
        let cat = catalog(GSON);
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.csv");

        render(&cat, &out).unwrap();
        let first = std::fs::read(&out).unwrap();
        render(&cat, &out).unwrap();
        let second = std::fs::read(&out).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_keeps_prior_rows_on_dangling_reference() {
        let cat = catalog(
            r#"{
                "libraries": [
                    {"name": "Good", "licenses": ["mit"]},
                    {"name": "Broken", "licenses": ["gone"]}
                ],
                "licenses": {"mit": {"name": "MIT", "url": "https://mit"}}
            }"#,
        );
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.csv");

        assert!(render(&cat, &out).is_err());

        // Rows before the failure survive; nothing after is written.
        let content = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec![HEADER, "Good;MIT;https://mit;\" \";"]);
    }
}
