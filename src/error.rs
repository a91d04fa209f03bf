use std::path::PathBuf;
use thiserror::Error;

/// 実行全体を中断するエラー
#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("フォルダを読み込めません: {path}: {source}")]
    FolderUnreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("出力ファイルを書き込めません: {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

/// 画像1枚分の抽出エラー（集約時にスキップ扱い）
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("ファイルを読み込めません: {0}")]
    Unreadable(#[from] std::io::Error),

    #[error("未対応の画像形式: {0}")]
    UnsupportedFormat(String),

    #[error("画像が破損しています: {0}")]
    CorruptImage(String),

    #[error("EXIFメタデータがありません")]
    MissingMetadata,

    #[error("EXIFメタデータが破損しています: {0}")]
    CorruptMetadata(String),

    #[error("EXIFにDateTimeフィールドがありません")]
    MissingDateField,

    #[error("日時の形式が不正です: {0:?}")]
    MalformedDate(String),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
