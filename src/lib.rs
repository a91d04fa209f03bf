//! exif-timeline
//!
//! 画像フォルダを走査してEXIFの撮影日時を読み取り、
//! 日付順のイベント一覧（events.json）を生成する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod scanner;
pub mod timeline;

pub use config::Config;
pub use error::{ExtractError, Result, TimelineError};
pub use timeline::{EventRecord, EventsDocument};

