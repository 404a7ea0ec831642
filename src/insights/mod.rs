//! Derived information for an accepted cycle entry: duration, upcoming
//! periods with their fertile windows, and symptom tips.
//!
//! Everything here is computed from the single entry just submitted. Nothing
//! is remembered between submissions.

use chrono::{Duration, NaiveDate};

use crate::config::TrackerConfig;
use crate::form::CycleEntry;

/// Days between ovulation and the start of the following period.
const LUTEAL_PHASE_DAYS: i64 = 14;
/// Fertile window bounds relative to ovulation.
const FERTILE_DAYS_BEFORE: i64 = 2;
const FERTILE_DAYS_AFTER: i64 = 1;

/// Accepted input formats, tried in order.
const INPUT_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d-%m-%Y"];
/// Format used when showing computed dates.
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";

const TIPS: [(&[&str], &str); 4] = [
    (
        &["cramps"],
        "Try heat therapy or light exercise to relieve cramps.",
    ),
    (
        &["headache"],
        "Stay hydrated and consider a small dose of over-the-counter pain relief.",
    ),
    (
        &["moodswings", "mood swings"],
        "Engage in activities you enjoy or practice mindfulness to help stabilize your mood.",
    ),
    (&["nausea"], "Ginger tea may help soothe nausea."),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictedPeriod {
    pub start: NaiveDate,
    pub ovulation: NaiveDate,
    pub fertile_start: NaiveDate,
    pub fertile_end: NaiveDate,
}

impl PredictedPeriod {
    /// `None` when a derived date falls outside chrono's calendar range.
    fn from_start(start: NaiveDate) -> Option<Self> {
        let ovulation = start.checked_sub_signed(Duration::days(LUTEAL_PHASE_DAYS))?;
        Some(Self {
            start,
            ovulation,
            fertile_start: ovulation.checked_sub_signed(Duration::days(FERTILE_DAYS_BEFORE))?,
            fertile_end: ovulation.checked_add_signed(Duration::days(FERTILE_DAYS_AFTER))?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleInsights {
    /// Signed day count from start to end, when both dates parse.
    pub duration_days: Option<i64>,
    pub predictions: Vec<PredictedPeriod>,
    pub tips: Vec<&'static str>,
}

impl CycleInsights {
    pub fn is_empty(&self) -> bool {
        self.duration_days.is_none() && self.predictions.is_empty() && self.tips.is_empty()
    }

    /// Human-readable lines for the insights panel.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(days) = self.duration_days {
            out.push(format!("Period length: {} days", days));
        }
        for (i, p) in self.predictions.iter().enumerate() {
            out.push(format!(
                "Predicted period {}: {}",
                i + 1,
                p.start.format(DISPLAY_DATE_FORMAT)
            ));
            out.push(format!(
                "  Ovulation: {}  Fertile window: {} to {}",
                p.ovulation.format(DISPLAY_DATE_FORMAT),
                p.fertile_start.format(DISPLAY_DATE_FORMAT),
                p.fertile_end.format(DISPLAY_DATE_FORMAT)
            ));
        }
        for tip in &self.tips {
            out.push(format!("Tip: {}", tip));
        }
        out
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Predicted period starts following `last_end`, each one cycle apart.
///
/// A zero cycle length predicts nothing. Predictions stop at the end of the
/// representable calendar.
pub fn predict_periods(last_end: NaiveDate, cycle_length_days: u32, count: usize) -> Vec<PredictedPeriod> {
    if cycle_length_days == 0 {
        return Vec::new();
    }
    let Some(step) = Duration::try_days(i64::from(cycle_length_days)) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut start = last_end;
    for _ in 0..count {
        start = match start.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
        if let Some(period) = PredictedPeriod::from_start(start) {
            out.push(period);
        }
    }
    out
}

/// Tips for recognised symptoms, each at most once, in symptom order.
pub fn health_tips(symptoms: &[String]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for symptom in symptoms {
        let symptom = symptom.trim().to_lowercase();
        if symptom.is_empty() {
            continue;
        }
        let tip = TIPS
            .iter()
            .find(|(names, _)| names.contains(&symptom.as_str()))
            .map(|(_, tip)| *tip);
        if let Some(tip) = tip {
            if !out.contains(&tip) {
                out.push(tip);
            }
        }
    }
    out
}

pub fn analyze(entry: &CycleEntry, config: &TrackerConfig) -> CycleInsights {
    let start = parse_date(&entry.start_date);
    let end = parse_date(&entry.end_date);

    let duration_days = match (start, end) {
        (Some(s), Some(e)) => Some((e - s).num_days()),
        _ => None,
    };

    let predictions = end
        .map(|e| predict_periods(e, config.cycle_length_days, config.predicted_cycles))
        .unwrap_or_default();

    CycleInsights {
        duration_days,
        predictions,
        tips: health_tips(&entry.symptoms),
    }
}
