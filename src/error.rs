use std::path::PathBuf;

use thiserror::Error;

/// Conditions that end the run with a plain message instead of a full error
/// chain.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSVファイルが見つかりません: {}", .path.display())]
    MissingCsv { path: PathBuf },

    #[error(
        "テンプレートが見つかりません。検索したパス:\n  1. ローカル: {}\n  2. パッケージ: {}\n  3. レガシー: {}\n\nテンプレートをカスタマイズする場合は、既定のテンプレートをプロジェクト直下にコピーしてください:\n  cp {} {}",
        .local.display(),
        .package.display(),
        .legacy.display(),
        .package.display(),
        .local.display()
    )]
    TemplateNotFound {
        local: PathBuf,
        package: PathBuf,
        legacy: PathBuf,
    },
}
