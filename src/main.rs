mod aggregate;
mod cli;
mod error;
mod inventory;
mod output;
mod paths;
mod progress;
mod render;
mod template;
mod types;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::error::ReportError;
use crate::paths::ReportPaths;
use crate::types::LicenseRecord;

fn main() -> Result<()> {
    match run() {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<ReportError>() {
            Some(report_err) => {
                eprintln!("エラー: {report_err}");
                std::process::exit(1);
            }
            None => Err(err),
        },
    }
}

fn run() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let cli = Cli::parse();

    let working_dir = paths::resolve_path(cli.dir.as_deref(), &cwd);
    let install_dir = match cli.install_dir.as_deref() {
        Some(dir) => paths::resolve_path(Some(dir), &cwd),
        None => paths::default_install_dir()?,
    };
    let report_paths = ReportPaths::new(&working_dir, &install_dir);

    println!("> ライセンスページを生成中...");
    let records = progress::with_spinner(
        "ライセンス一覧を読み込み中...",
        |records: &Vec<LicenseRecord>| format!("ライセンス一覧を読み込みました ({}件)", records.len()),
        |spinner| {
            inventory::load_licenses(
                &report_paths.csv_file,
                &report_paths.texts_dir,
                Some(spinner),
            )
        },
    )?;
    let counts = aggregate::count_licenses(&records);

    let template = template::find_template(&report_paths)?;
    println!(
        "> {}テンプレートを使用: {}",
        template.tier,
        template.path.display()
    );

    let html = render::render_html(&template, &records, &counts)?;
    output::write_html(&html, &report_paths.output_file)?;

    if cli.summary {
        output::print_summary_table(&counts, records.len());
    }
    if let Some(path) = cli.json_output.as_deref() {
        output::output_json(&records, &counts, &paths::resolve_path(Some(path), &working_dir))?;
    }

    println!(
        "✔ ライセンスページを生成しました: {}",
        report_paths.output_file.display()
    );
    println!("  パッケージ数: {}", records.len());
    println!("  ライセンス種別数: {}", counts.len());

    Ok(())
}
