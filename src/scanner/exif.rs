use crate::error::ExtractError;
use image::{ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 画像のEXIF DateTime（0th IFD）を生の文字列で取り出す
///
/// 形式は `"YYYY:MM:DD HH:MM:SS"` を想定するが、ここでは検証しない。
pub fn extract_date_time(path: &Path) -> Result<String, ExtractError> {
    check_image(path)?;

    let file = File::open(path)?;
    let mut bufreader = BufReader::new(file);
    let exif_reader = exif::Reader::new();
    let exif = exif_reader
        .read_from_container(&mut bufreader)
        .map_err(|e| match e {
            exif::Error::NotFound(_) => ExtractError::MissingMetadata,
            exif::Error::Io(io) => ExtractError::Unreadable(io),
            other => ExtractError::CorruptMetadata(other.to_string()),
        })?;

    let field = exif
        .get_field(exif::Tag::DateTime, exif::In::PRIMARY)
        .ok_or(ExtractError::MissingDateField)?;

    // display_value() は "YYYY-MM-DD" 形式に整形してしまうため生の値を読む
    match &field.value {
        exif::Value::Ascii(values) => {
            let raw = values
                .first()
                .ok_or_else(|| ExtractError::MalformedDate(String::new()))?;
            String::from_utf8(raw.clone())
                .map_err(|e| ExtractError::MalformedDate(String::from_utf8_lossy(e.as_bytes()).into_owned()))
        }
        other => Err(ExtractError::MalformedDate(format!("{:?}", other))),
    }
}

/// PNG/JPEGとして開けるか確認する（ヘッダのみ読む）
fn check_image(path: &Path) -> Result<(), ExtractError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;

    match reader.format() {
        Some(ImageFormat::Png) | Some(ImageFormat::Jpeg) => {}
        Some(other) => return Err(ExtractError::UnsupportedFormat(format!("{:?}", other))),
        None => return Err(ExtractError::UnsupportedFormat("unknown".to_string())),
    }

    reader
        .into_dimensions()
        .map_err(|e| ExtractError::CorruptImage(e.to_string()))?;

    Ok(())
}
