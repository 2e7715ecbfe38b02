use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const TEMPLATE_FILE_NAME: &str = "licenses.html.j2";

/// Every file location the run touches, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub csv_file: PathBuf,
    pub texts_dir: PathBuf,
    pub output_file: PathBuf,
    pub local_template: PathBuf,
    pub package_template: PathBuf,
    pub legacy_template: PathBuf,
}

impl ReportPaths {
    pub fn new(working_dir: &Path, install_dir: &Path) -> Self {
        let licenses_dir = working_dir.join("licenses");
        Self {
            csv_file: licenses_dir.join("licenses.csv"),
            texts_dir: licenses_dir.join("texts"),
            output_file: working_dir.join("public").join("licenses.html"),
            local_template: working_dir.join(TEMPLATE_FILE_NAME),
            package_template: install_dir.join("templates").join(TEMPLATE_FILE_NAME),
            legacy_template: install_dir.join("scripts").join(TEMPLATE_FILE_NAME),
        }
    }
}

pub fn resolve_path(path: Option<&Path>, cwd: &Path) -> PathBuf {
    match path {
        Some(p) if p.is_relative() => cwd.join(p),
        Some(p) => p.to_path_buf(),
        None => cwd.to_path_buf(),
    }
}

/// Directory holding the executable (or its parent for a `bin/` layout) when
/// it carries a template; otherwise the package source tree, which ships
/// `templates/licenses.html.j2`.
pub fn default_install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("実行ファイルのパスを取得できませんでした")?;
    let exe_dir = exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(pick_install_dir(
        install_dir_for(&exe_dir),
        Path::new(env!("CARGO_MANIFEST_DIR")),
    ))
}

fn pick_install_dir(beside_exe: PathBuf, package_root: &Path) -> PathBuf {
    if has_template(&beside_exe) || !has_template(package_root) {
        beside_exe
    } else {
        package_root.to_path_buf()
    }
}

fn has_template(install_dir: &Path) -> bool {
    ["templates", "scripts"]
        .iter()
        .any(|tier| install_dir.join(tier).join(TEMPLATE_FILE_NAME).is_file())
}

fn install_dir_for(exe_dir: &Path) -> PathBuf {
    if exe_dir.file_name().is_some_and(|name| name == "bin") {
        if let Some(parent) = exe_dir.parent() {
            return parent.to_path_buf();
        }
    }
    exe_dir.to_path_buf()
}
