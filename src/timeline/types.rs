use serde::{Deserialize, Serialize};

/// 撮影日（EXIFの部分文字列をそのまま保持）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl DateParts {
    /// 並べ替えキー
    ///
    /// 文字列比較のまま使う。EXIFの日時は年4桁・月日2桁のゼロ埋め固定幅なので
    /// 辞書順がそのまま時系列順になる。
    pub fn sort_key(&self) -> (&str, &str, &str) {
        (&self.year, &self.month, &self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
}

/// 手入力用の空オブジェクト。常に `{}` として出力される
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventText {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub start_date: DateParts,
    pub media: MediaRef,
    #[serde(default)]
    pub text: EventText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsDocument {
    pub events: Vec<EventRecord>,
}
