//! 撮影日時 → タイムラインイベント変換
//!
//! 1枚ごとの抽出は独立しているため rayon で並列に処理し、
//! 最後に日付順へ並べ替えて1つのドキュメントにまとめる。

mod types;

pub use types::{DateParts, EventRecord, EventText, EventsDocument, MediaRef};

use crate::error::{ExtractError, Result};
use crate::scanner::{self, ImageInfo};
use rayon::prelude::*;
use std::path::Path;

/// `"YYYY:MM:DD HH:MM:SS"` の日付部分を年・月・日に分割
///
/// 数値としての検証はしない。区切りが3つ未満なら不正とみなす。
pub fn convert_date_format(date_str: &str) -> std::result::Result<DateParts, ExtractError> {
    let date = date_str.split(' ').next().unwrap_or_default();
    let mut parts = date.split(':');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => Ok(DateParts {
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
        }),
        _ => Err(ExtractError::MalformedDate(date_str.to_string())),
    }
}

/// 同名のPNGを指すURLを組み立てる（ファイルの存在は確認しない）
///
/// 最後の `.` 以降を拡張子として落とす。`.jpg` のようなファイル名は語幹が空になる。
pub fn media_url(prefix: &str, file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);

    format!("{}{}.png", prefix, stem)
}

pub fn extract_event(
    path: &Path,
    file_name: &str,
    media_prefix: &str,
) -> std::result::Result<EventRecord, ExtractError> {
    let date_taken = scanner::exif::extract_date_time(path)?;
    let start_date = convert_date_format(&date_taken)?;

    Ok(EventRecord {
        start_date,
        media: MediaRef {
            url: media_url(media_prefix, file_name),
        },
        text: EventText::default(),
    })
}

/// 抽出に失敗した画像はログに出してスキップする
pub fn build_events(images: &[ImageInfo], media_prefix: &str) -> EventsDocument {
    let mut events: Vec<EventRecord> = images
        .par_iter()
        .filter_map(|img| match extract_event(&img.path, &img.file_name, media_prefix) {
            Ok(event) => {
                log::debug!("{}: {:?}", img.path.display(), event.start_date);
                Some(event)
            }
            Err(e) => {
                log::warn!("処理エラー {}: {}", img.path.display(), e);
                None
            }
        })
        .collect();

    sort_events(&mut events);

    EventsDocument { events }
}

/// (年, 月, 日) の文字列順で安定ソート。同日付は入力順のまま
pub fn sort_events(events: &mut [EventRecord]) {
    events.sort_by(|a, b| a.start_date.sort_key().cmp(&b.start_date.sort_key()));
}

pub fn process_images_in_directory(folder: &Path, media_prefix: &str) -> Result<EventsDocument> {
    let images = scanner::scan_folder(folder)?;
    log::info!("{}枚の画像を検出: {}", images.len(), folder.display());

    let document = build_events(&images, media_prefix);
    log::info!(
        "{}件のイベントを生成（スキップ: {}件）",
        document.events.len(),
        images.len() - document.events.len()
    );

    Ok(document)
}
