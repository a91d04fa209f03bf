use crate::error::{Result, TimelineError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "static/img/";
pub const DEFAULT_OUTPUT_PATH: &str = "static/data/events.json";
pub const DEFAULT_MEDIA_URL_PREFIX: &str = "static/image_png/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 画像フォルダ
    pub input_dir: PathBuf,
    /// 出力JSONファイル
    pub output_path: PathBuf,
    /// media.url の先頭に付ける文字列
    pub media_url_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            media_url_prefix: DEFAULT_MEDIA_URL_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// 設定を読み込む
    ///
    /// 明示されたファイルは必須。指定がなければ既定の場所を探し、
    /// 見つからなければデフォルト値を使う。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(TimelineError::Config(format!(
                    "設定ファイルが見つかりません: {}",
                    path.display()
                )));
            }
            return Self::load_from(path);
        }

        match Self::config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            TimelineError::Config(format!("{}: {}", path.display(), e))
        })
    }

    pub fn config_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        Some(home.join(".config").join("exif-timeline").join("config.json"))
    }

    /// CLI引数で上書き
    pub fn apply_overrides(
        &mut self,
        input_dir: Option<PathBuf>,
        output_path: Option<PathBuf>,
        media_url_prefix: Option<String>,
    ) {
        if let Some(dir) = input_dir {
            self.input_dir = dir;
        }
        if let Some(path) = output_path {
            self.output_path = path;
        }
        if let Some(prefix) = media_url_prefix {
            self.media_url_prefix = prefix;
        }
    }
}
