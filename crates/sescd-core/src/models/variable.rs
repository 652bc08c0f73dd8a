use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the four ordinal scoring dimensions rated per segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Variable {
    UlcerSize,
    UlcerSurface,
    AffectedSurface,
    Stenosis,
}

impl Variable {
    /// Fixed rating order, also the order voice dictation walks through.
    pub const ALL: [Variable; 4] = [
        Variable::UlcerSize,
        Variable::UlcerSurface,
        Variable::AffectedSurface,
        Variable::Stenosis,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Variable::UlcerSize => "ulcer-size",
            Variable::UlcerSurface => "ulcer-surface",
            Variable::AffectedSurface => "affected-surface",
            Variable::Stenosis => "stenosis",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Variable::UlcerSize => "潰瘍サイズ",
            Variable::UlcerSurface => "潰瘍面積",
            Variable::AffectedSurface => "病変面積",
            Variable::Stenosis => "狭窄",
        }
    }

    /// Human-readable criteria, indexed by score value.
    pub fn criteria(self) -> &'static [&'static str; 4] {
        match self {
            Variable::UlcerSize => &[
                "潰瘍なし",
                "アフタ性潰瘍（0.1〜0.5cm）",
                "大きな潰瘍（0.5〜2cm）",
                "非常に大きな潰瘍（＞2cm）",
            ],
            Variable::UlcerSurface => &["なし", "＜10%", "10〜30%", "＞30%"],
            Variable::AffectedSurface => &["病変なし", "＜50%", "50〜75%", "＞75%"],
            Variable::Stenosis => &["なし", "単発、通過可能", "多発、通過可能", "通過不能"],
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Variable {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variable::ALL
            .into_iter()
            .find(|variable| variable.key() == s)
            .ok_or_else(|| CoreError::UnknownVariable(s.to_string()))
    }
}
