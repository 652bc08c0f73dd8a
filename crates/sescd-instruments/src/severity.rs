use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Highest attainable SES-CD: 4 variables × 3 points × 5 segments.
pub const SES_CD_MAX: u32 = 60;

/// MM-SES-CD totals strictly below this are endoscopic remission.
pub const MM_SES_CD_REMISSION_THRESHOLD: f64 = 22.5;

/// Floor for the severity bar in the remission band, in percent.
const REMISSION_BAR_FLOOR: f64 = 3.0;

/// SES-CD severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    /// 0–2
    Remission,
    /// 3–6
    Mild,
    /// 7–15
    Moderate,
    /// 16+
    Severe,
}

impl Severity {
    pub fn classify(ses_cd_total: u32) -> Self {
        match ses_cd_total {
            0..=2 => Severity::Remission,
            3..=6 => Severity::Mild,
            7..=15 => Severity::Moderate,
            _ => Severity::Severe,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Remission => "寛解",
            Severity::Mild => "軽症",
            Severity::Moderate => "中等症",
            Severity::Severe => "重症",
        }
    }

    /// Width of the severity bar, in percent of [`SES_CD_MAX`].
    pub fn bar_percent(self, ses_cd_total: u32) -> f64 {
        let percent = f64::from(ses_cd_total) / f64::from(SES_CD_MAX) * 100.0;
        match self {
            Severity::Remission => percent.max(REMISSION_BAR_FLOOR),
            _ => percent,
        }
    }
}

/// MM-SES-CD remission status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RemissionStatus {
    EndoscopicRemission,
    ActiveDisease,
}

impl RemissionStatus {
    pub fn classify(mm_ses_cd_total: f64) -> Self {
        if mm_ses_cd_total < MM_SES_CD_REMISSION_THRESHOLD {
            RemissionStatus::EndoscopicRemission
        } else {
            RemissionStatus::ActiveDisease
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RemissionStatus::EndoscopicRemission => "Endoscopic Remission",
            RemissionStatus::ActiveDisease => "Active Disease",
        }
    }

    pub fn is_remission(self) -> bool {
        self == RemissionStatus::EndoscopicRemission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_on_the_upper_end() {
        let cases = [
            (0, Severity::Remission),
            (2, Severity::Remission),
            (3, Severity::Mild),
            (6, Severity::Mild),
            (7, Severity::Moderate),
            (15, Severity::Moderate),
            (16, Severity::Severe),
            (60, Severity::Severe),
        ];
        for (total, expected) in cases {
            assert_eq!(Severity::classify(total), expected, "total {total}");
        }
    }

    #[test]
    fn remission_bar_never_drops_below_floor() {
        assert_eq!(Severity::Remission.bar_percent(0), 3.0);
        assert_eq!(Severity::Remission.bar_percent(1), 3.0);
        assert_eq!(Severity::Remission.bar_percent(2), 2.0 / 60.0 * 100.0);
    }

    #[test]
    fn bar_is_proportional_outside_remission() {
        assert!((Severity::Mild.bar_percent(3) - 5.0).abs() < 1e-9);
        assert_eq!(Severity::Severe.bar_percent(60), 100.0);
    }

    #[test]
    fn remission_threshold_is_exclusive() {
        assert!(RemissionStatus::classify(22.4).is_remission());
        assert_eq!(RemissionStatus::classify(22.5), RemissionStatus::ActiveDisease);
        assert_eq!(RemissionStatus::classify(0.0).label(), "Endoscopic Remission");
    }
}
