use serde::{Deserialize, Serialize};
use std::fmt;

/// Screen-time-before-bed bucket. Display only, never aggregated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScreenTimeBucket {
    #[serde(rename = "Under 30 min")]
    UnderHalfHour,
    #[serde(rename = "30-60 min")]
    HalfToFullHour,
    #[serde(rename = "1-2 timer")]
    OneToTwoHours,
    #[serde(rename = "Mere end 2 timer")]
    OverTwoHours,
}

impl ScreenTimeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenTimeBucket::UnderHalfHour => "Under 30 min",
            ScreenTimeBucket::HalfToFullHour => "30-60 min",
            ScreenTimeBucket::OneToTwoHours => "1-2 timer",
            ScreenTimeBucket::OverTwoHours => "Mere end 2 timer",
        }
    }
}

impl fmt::Display for ScreenTimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ScreenTimeBucket {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Under 30 min" => Ok(ScreenTimeBucket::UnderHalfHour),
            "30-60 min" => Ok(ScreenTimeBucket::HalfToFullHour),
            "1-2 timer" => Ok(ScreenTimeBucket::OneToTwoHours),
            "Mere end 2 timer" => Ok(ScreenTimeBucket::OverTwoHours),
            other => Err(format!("unsupported screen time bucket: {other}")),
        }
    }
}

/// Self-assessed exam performance on the questionnaire's 5-point ordinal
/// scale. Display only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PerformanceLevel {
    #[serde(rename = "Meget godt")]
    VeryGood,
    #[serde(rename = "Godt")]
    Good,
    #[serde(rename = "Middel")]
    Average,
    #[serde(rename = "Dårligt")]
    Poor,
    #[serde(rename = "Meget dårligt")]
    VeryPoor,
}

impl PerformanceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceLevel::VeryGood => "Meget godt",
            PerformanceLevel::Good => "Godt",
            PerformanceLevel::Average => "Middel",
            PerformanceLevel::Poor => "Dårligt",
            PerformanceLevel::VeryPoor => "Meget dårligt",
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PerformanceLevel {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Meget godt" => Ok(PerformanceLevel::VeryGood),
            "Godt" => Ok(PerformanceLevel::Good),
            "Middel" => Ok(PerformanceLevel::Average),
            "Dårligt" => Ok(PerformanceLevel::Poor),
            "Meget dårligt" => Ok(PerformanceLevel::VeryPoor),
            other => Err(format!("unsupported performance level: {other}")),
        }
    }
}

/// One persisted questionnaire submission. Fields are stored as the raw
/// label strings so that the on-disk collection stays a plain JSON array of
/// five-string objects; labels outside the enumerations survive a load and
/// flow through aggregation as undefined scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub sleep_bucket: String,
    pub screen_time_bucket: String,
    pub written_performance: String,
    pub oral_performance: String,
    pub most_common_grade: String,
}

/// Form payload as received from the frontend: every field is explicitly
/// optional instead of an empty-string sentinel. Empty strings normalize to
/// unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDraft {
    #[serde(default)]
    pub sleep_bucket: Option<String>,
    #[serde(default)]
    pub screen_time_bucket: Option<String>,
    #[serde(default)]
    pub written_performance: Option<String>,
    #[serde(default)]
    pub oral_performance: Option<String>,
    #[serde(default)]
    pub most_common_grade: Option<String>,
}

impl SurveyDraft {
    fn normalized(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Names of the fields still unset, in form order. Field names use the
    /// wire spelling so the frontend can highlight the matching inputs.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if Self::normalized(&self.sleep_bucket).is_none() {
            missing.push("sleepBucket");
        }
        if Self::normalized(&self.screen_time_bucket).is_none() {
            missing.push("screenTimeBucket");
        }
        if Self::normalized(&self.written_performance).is_none() {
            missing.push("writtenPerformance");
        }
        if Self::normalized(&self.oral_performance).is_none() {
            missing.push("oralPerformance");
        }
        if Self::normalized(&self.most_common_grade).is_none() {
            missing.push("mostCommonGrade");
        }
        missing
    }

    /// Converts the draft into a complete response, or reports the missing
    /// fields. Enum membership is checked separately by the survey service.
    pub fn finalize(self) -> Result<SurveyResponse, Vec<&'static str>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing);
        }

        let take = |value: Option<String>| value.map(|v| v.trim().to_string()).unwrap_or_default();

        Ok(SurveyResponse {
            sleep_bucket: take(self.sleep_bucket),
            screen_time_bucket: take(self.screen_time_bucket),
            written_performance: take(self.written_performance),
            oral_performance: take(self.oral_performance),
            most_common_grade: take(self.most_common_grade),
        })
    }
}
