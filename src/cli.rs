use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exif-timeline")]
#[command(about = "写真のEXIF撮影日時からタイムライン用JSONを生成", long_about = None)]
pub struct Cli {
    /// 画像フォルダ（デフォルト: static/img/）
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 出力JSONファイル（デフォルト: static/data/events.json）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// media.url の接頭辞（デフォルト: static/image_png/）
    #[arg(long)]
    pub media_prefix: Option<String>,

    /// 設定ファイル（JSON）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 標準出力にJSONを表示しない
    #[arg(long)]
    pub no_print: bool,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}
