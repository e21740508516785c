use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Abbreviated Portuguese weekday name, Monday first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum WeekdayLabel {
    #[display(fmt = "Seg")]
    Seg,
    #[display(fmt = "Ter")]
    Ter,
    #[display(fmt = "Qua")]
    Qua,
    #[display(fmt = "Qui")]
    Qui,
    #[display(fmt = "Sex")]
    Sex,
    #[display(fmt = "Sab")]
    Sab,
    #[display(fmt = "Dom")]
    Dom,
}

/// Labels indexed by days from Monday.
pub const WEEKDAY_LABELS: [WeekdayLabel; 7] = [
    WeekdayLabel::Seg,
    WeekdayLabel::Ter,
    WeekdayLabel::Qua,
    WeekdayLabel::Qui,
    WeekdayLabel::Sex,
    WeekdayLabel::Sab,
    WeekdayLabel::Dom,
];

impl WeekdayLabel {
    /// Label for `index` days from Monday (Monday = 0 .. Sunday = 6).
    pub const fn from_index(index: u32) -> Option<Self> {
        if index < WEEKDAY_LABELS.len() as u32 {
            Some(WEEKDAY_LABELS[index as usize])
        } else {
            None
        }
    }

    /// Days from Monday.
    pub const fn index(self) -> u32 {
        self as u32
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seg => "Seg",
            Self::Ter => "Ter",
            Self::Qua => "Qua",
            Self::Qui => "Qui",
            Self::Sex => "Sex",
            Self::Sab => "Sab",
            Self::Dom => "Dom",
        }
    }

    /// Monday through Friday.
    pub const fn is_weekday(self) -> bool {
        !matches!(self, Self::Sab | Self::Dom)
    }
}

impl From<chrono::Weekday> for WeekdayLabel {
    fn from(weekday: chrono::Weekday) -> Self {
        WEEKDAY_LABELS[weekday.num_days_from_monday() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_from_index_table() {
        let expected = ["Seg", "Ter", "Qua", "Qui", "Sex", "Sab", "Dom"];
        for (i, name) in expected.iter().enumerate() {
            let label = WeekdayLabel::from_index(i as u32).unwrap();
            assert_eq!(label.as_str(), *name);
            assert_eq!(label.to_string(), *name);
            assert_eq!(label.index(), i as u32);
        }
        assert_eq!(WeekdayLabel::from_index(7), None);
    }

    #[test]
    fn test_from_chrono_weekday() {
        assert_eq!(WeekdayLabel::from(Weekday::Mon), WeekdayLabel::Seg);
        assert_eq!(WeekdayLabel::from(Weekday::Tue), WeekdayLabel::Ter);
        assert_eq!(WeekdayLabel::from(Weekday::Sun), WeekdayLabel::Dom);
    }

    #[test]
    fn test_is_weekday() {
        assert!(WeekdayLabel::Seg.is_weekday());
        assert!(WeekdayLabel::Sex.is_weekday());
        assert!(!WeekdayLabel::Sab.is_weekday());
        assert!(!WeekdayLabel::Dom.is_weekday());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&WeekdayLabel::Ter).unwrap();
        assert_eq!(json, "\"Ter\"");
        let parsed: WeekdayLabel = serde_json::from_str("\"Dom\"").unwrap();
        assert_eq!(parsed, WeekdayLabel::Dom);
    }
}
