use serde::{Deserialize, Serialize};
use std::fmt;

/// Sleep-hours bucket offered by the questionnaire. Variant order is
/// ascending sleep duration, which is also ascending numeric score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SleepBucket {
    #[serde(rename = "<5h")]
    UnderFive,
    #[serde(rename = "5-6h")]
    FiveToSix,
    #[serde(rename = "7-8h")]
    SevenToEight,
    #[serde(rename = ">8h")]
    OverEight,
}

impl SleepBucket {
    pub const ALL: [SleepBucket; 4] = [
        SleepBucket::UnderFive,
        SleepBucket::FiveToSix,
        SleepBucket::SevenToEight,
        SleepBucket::OverEight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SleepBucket::UnderFive => "<5h",
            SleepBucket::FiveToSix => "5-6h",
            SleepBucket::SevenToEight => "7-8h",
            SleepBucket::OverEight => ">8h",
        }
    }

    /// Midpoint-style numeric stand-in used on the scatter/grouping axes.
    pub fn score(&self) -> f64 {
        match self {
            SleepBucket::UnderFive => 4.5,
            SleepBucket::FiveToSix => 5.5,
            SleepBucket::SevenToEight => 7.5,
            SleepBucket::OverEight => 9.0,
        }
    }
}

impl fmt::Display for SleepBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SleepBucket {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "<5h" => Ok(SleepBucket::UnderFive),
            "5-6h" => Ok(SleepBucket::FiveToSix),
            "7-8h" => Ok(SleepBucket::SevenToEight),
            ">8h" => Ok(SleepBucket::OverEight),
            other => Err(format!("unsupported sleep bucket: {other}")),
        }
    }
}

/// Grade label on the Danish 7-step scale. Variant order is ascending grade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GradeLabel {
    #[serde(rename = "-3")]
    MinusThree,
    #[serde(rename = "00")]
    Zero,
    #[serde(rename = "02")]
    Two,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "12")]
    Twelve,
}

impl GradeLabel {
    pub const ALL: [GradeLabel; 7] = [
        GradeLabel::MinusThree,
        GradeLabel::Zero,
        GradeLabel::Two,
        GradeLabel::Four,
        GradeLabel::Seven,
        GradeLabel::Ten,
        GradeLabel::Twelve,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLabel::MinusThree => "-3",
            GradeLabel::Zero => "00",
            GradeLabel::Two => "02",
            GradeLabel::Four => "4",
            GradeLabel::Seven => "7",
            GradeLabel::Ten => "10",
            GradeLabel::Twelve => "12",
        }
    }

    pub fn score(&self) -> i64 {
        match self {
            GradeLabel::MinusThree => -3,
            GradeLabel::Zero => 0,
            GradeLabel::Two => 2,
            GradeLabel::Four => 4,
            GradeLabel::Seven => 7,
            GradeLabel::Ten => 10,
            GradeLabel::Twelve => 12,
        }
    }

    /// Position on the grade scale, used to order distribution output.
    pub fn scale_position(label: &str) -> Option<usize> {
        GradeLabel::ALL.iter().position(|grade| grade.as_str() == label)
    }
}

impl fmt::Display for GradeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for GradeLabel {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "-3" => Ok(GradeLabel::MinusThree),
            "00" => Ok(GradeLabel::Zero),
            "02" => Ok(GradeLabel::Two),
            "4" => Ok(GradeLabel::Four),
            "7" => Ok(GradeLabel::Seven),
            "10" => Ok(GradeLabel::Ten),
            "12" => Ok(GradeLabel::Twelve),
            other => Err(format!("unsupported grade label: {other}")),
        }
    }
}

/// Maps a raw sleep-bucket label to its numeric score. Labels outside the
/// fixed enumeration yield `None`, never an error.
pub fn sleep_to_score(label: &str) -> Option<f64> {
    SleepBucket::try_from(label).ok().map(|bucket| bucket.score())
}

/// Maps a raw grade label to its numeric score. Labels outside the fixed
/// enumeration yield `None`, never an error.
pub fn grade_to_score(label: &str) -> Option<i64> {
    GradeLabel::try_from(label).ok().map(|grade| grade.score())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_scores_match_fixed_table() {
        assert_eq!(sleep_to_score("<5h"), Some(4.5));
        assert_eq!(sleep_to_score("5-6h"), Some(5.5));
        assert_eq!(sleep_to_score("7-8h"), Some(7.5));
        assert_eq!(sleep_to_score(">8h"), Some(9.0));
    }

    #[test]
    fn grade_scores_match_fixed_table() {
        let expected = [("-3", -3), ("00", 0), ("02", 2), ("4", 4), ("7", 7), ("10", 10), ("12", 12)];
        for (label, score) in expected {
            assert_eq!(grade_to_score(label), Some(score), "label {label}");
        }
    }

    #[test]
    fn unknown_labels_yield_none() {
        assert_eq!(sleep_to_score("9-10h"), None);
        assert_eq!(sleep_to_score(""), None);
        assert_eq!(grade_to_score("13"), None);
        assert_eq!(grade_to_score("A"), None);
    }

    #[test]
    fn mappers_are_deterministic() {
        for bucket in SleepBucket::ALL {
            assert_eq!(
                sleep_to_score(bucket.as_str()),
                sleep_to_score(bucket.as_str())
            );
        }
        for grade in GradeLabel::ALL {
            assert_eq!(grade_to_score(grade.as_str()), Some(grade.score()));
        }
    }

    #[test]
    fn scale_position_orders_grades_not_lexicographically() {
        // "4" sorts after "10"/"12" lexicographically; scale order must win.
        assert!(GradeLabel::scale_position("4") < GradeLabel::scale_position("7"));
        assert!(GradeLabel::scale_position("7") < GradeLabel::scale_position("10"));
        assert_eq!(GradeLabel::scale_position("13"), None);
    }
}
