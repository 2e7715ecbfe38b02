use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ライセンス一覧CSVとライセンス本文からHTMLのライセンスページを生成するCLI",
    long_about = None
)]
pub struct Cli {
    /// licenses/ と public/ を解決する作業ディレクトリ。省略時はカレントディレクトリ。
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// パッケージ・レガシーテンプレートを探すインストールディレクトリ。
    #[arg(long = "install-dir", value_name = "DIR")]
    pub install_dir: Option<PathBuf>,

    /// 集計結果とライセンス一覧をJSONで書き出すファイルパス。相対パスは作業ディレクトリ基準。
    #[arg(long = "json-output", value_name = "FILE")]
    pub json_output: Option<PathBuf>,

    /// ライセンス別の件数をテーブルで表示します。
    #[arg(long = "summary")]
    pub summary: bool,
}
