use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Voice input indicator shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VoiceStatus {
    Ready,
    Listening,
    Error,
    Unsupported,
}

impl VoiceStatus {
    pub fn label(self) -> &'static str {
        match self {
            VoiceStatus::Ready => "音声入力準備完了",
            VoiceStatus::Listening => "音声認識中...",
            VoiceStatus::Error => "エラー発生",
            VoiceStatus::Unsupported => "音声認識非対応",
        }
    }
}
