use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::ProgressBar;

use crate::error::ReportError;
use crate::types::{InventoryRow, LicenseRecord};

/// Builds the license text file name for a component.
///
/// Must stay byte-for-byte identical to the downloader that wrote
/// `licenses/texts/`: anything outside `[A-Za-z0-9.-]` becomes `_`, once per
/// UTF-16 code unit.
pub fn sanitize_filename(name: &str, version: &str) -> String {
    format!("{}-{}.txt", sanitize(name), sanitize(version))
}

fn sanitize(value: &str) -> String {
    let mut buf = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
            buf.push(ch);
        } else {
            for _ in 0..ch.len_utf16() {
                buf.push('_');
            }
        }
    }
    buf
}

pub fn load_licenses(
    csv_file: &Path,
    texts_dir: &Path,
    progress: Option<&ProgressBar>,
) -> Result<Vec<LicenseRecord>> {
    if !csv_file.exists() {
        return Err(ReportError::MissingCsv {
            path: csv_file.to_path_buf(),
        }
        .into());
    }

    // Rows are matched to columns by header name; ragged rows only fail when
    // a required column ends up missing.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(csv_file)
        .with_context(|| format!("CSVファイルの読み込みに失敗: {}", csv_file.display()))?;

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<InventoryRow>().enumerate() {
        let row = row.with_context(|| {
            format!(
                "CSVの解析に失敗: {} ({}行目のデータ)",
                csv_file.display(),
                idx + 1
            )
        })?;

        if let Some(pb) = progress {
            pb.set_message(format!("ライセンス本文を読み込み中: {}", row.name));
        }

        let text_path = texts_dir.join(sanitize_filename(&row.name, &row.version));
        let license_text = read_license_text(&text_path, progress);

        records.push(LicenseRecord {
            name: row.name,
            version: row.version,
            license: row.license,
            license_url: row.license_url,
            license_text,
        });
    }

    Ok(records)
}

/// A missing or unreadable file yields `None`; invalid UTF-8 is replaced.
fn read_license_text(path: &Path, progress: Option<&ProgressBar>) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => {
            let warn = || {
                eprintln!(
                    "警告: ライセンスファイルを読み込めませんでした {}: {err}",
                    path.display()
                )
            };
            match progress {
                Some(pb) => pb.suspend(warn),
                None => warn(),
            }
            None
        }
    }
}
