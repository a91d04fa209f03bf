use crate::error::{Result, TimelineError};
use crate::timeline::EventsDocument;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

const JSON_INDENT: &[u8] = b"    ";

/// インデント4スペースのJSONに整形
pub fn to_json(document: &EventsDocument) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut ser)?;

    // serde_json の出力は常にUTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// 出力ファイルを上書き保存し、書き込んだJSONを返す
///
/// 親ディレクトリは作成しない。一時ファイル経由のアトミックな書き込みもしない。
pub fn write_events(document: &EventsDocument, output: &Path) -> Result<String> {
    let json = to_json(document)?;
    write_json(&json, output)?;
    Ok(json)
}

pub fn write_json(json: &str, output: &Path) -> Result<()> {
    std::fs::write(output, json).map_err(|source| TimelineError::OutputWrite {
        path: output.to_path_buf(),
        source,
    })
}
