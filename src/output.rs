use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use crate::types::{LicenseCount, LicenseRecord};

/// Writes the report, creating parent directories and replacing any previous
/// file.
pub fn write_html(html: &str, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("出力ディレクトリの作成に失敗: {}", parent.display()))?;
    }
    fs::write(output_path, html)
        .with_context(|| format!("HTMLファイルの書き込みに失敗: {}", output_path.display()))?;
    Ok(())
}

pub fn print_summary_table(counts: &[LicenseCount], total: usize) {
    if counts.is_empty() {
        println!("ライセンス情報はありませんでした。");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        Cell::new("License").add_attribute(Attribute::Bold),
        Cell::new("Packages").add_attribute(Attribute::Bold),
        Cell::new("Share").add_attribute(Attribute::Bold),
    ]);

    for entry in counts {
        let share = entry.count as f64 * 100.0 / total as f64;
        table.add_row(vec![
            colorize_license(&entry.license),
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{share:.1}%")).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
}

fn colorize_license(license: &str) -> Cell {
    let lower = license.to_ascii_lowercase();

    if lower.contains("gpl") {
        return Cell::new(license)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold);
    }

    if lower.contains("mit") {
        return Cell::new(license)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold);
    }

    if lower.contains("bsd") {
        return Cell::new(license)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold);
    }

    if lower.contains("apache") {
        return Cell::new(license)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold);
    }

    if lower.is_empty() || lower == "unknown" {
        return Cell::new(license)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold);
    }

    Cell::new(license).fg(Color::Magenta)
}

#[derive(Debug, Serialize)]
struct InventoryExport<'a> {
    total_count: usize,
    license_counts: &'a [LicenseCount],
    licenses: &'a [LicenseRecord],
}

pub fn output_json(
    records: &[LicenseRecord],
    counts: &[LicenseCount],
    output_path: &Path,
) -> Result<()> {
    let export = InventoryExport {
        total_count: records.len(),
        license_counts: counts,
        licenses: records,
    };
    let json = serde_json::to_string_pretty(&export)?;
    fs::write(output_path, &json)
        .with_context(|| format!("JSONファイルの書き込みに失敗: {}", output_path.display()))?;
    println!("JSONを{}に書き出しました。", output_path.display());
    Ok(())
}
