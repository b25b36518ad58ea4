//! Learner performance analytics.
//!
//! Descriptive statistics over exam results that complement the
//! recommenders: weak subjects, time pressure, score trend, standing
//! against peers, and per-subject monthly averages.
//!
//! # Examples
//!
//! ```
//! use subject_recommender::analytics::{learner_insights, Trend};
//! use subject_recommender::config::AnalyticsConfig;
//! use subject_recommender::data::ExamResultRecord;
//!
//! let records = vec![
//!     ExamResultRecord::new("A", "Math", 55.0),
//!     ExamResultRecord::new("A", "Math", 60.0),
//!     ExamResultRecord::new("B", "Math", 90.0),
//! ];
//! let insights = learner_insights("A", &records, &AnalyticsConfig::default());
//! assert_eq!(insights.weak_subjects[0].subject, "Math");
//! assert_eq!(insights.trend, Trend::Stable);
//! assert_eq!(insights.peer_comparison[0].peer_average, 90.0);
//! ```

use crate::config::AnalyticsConfig;
use crate::data::ExamResultRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Direction of a learner's latest score relative to earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Fewer than two results: nothing to compare against.
    Insufficient,
    /// Latest score below the mean of all prior scores.
    Declining,
    /// Within the improvement margin of the prior mean.
    Stable,
    /// Latest score more than the margin above the prior mean.
    Improving,
}

/// Classifies chronologically ordered scores.
///
/// The latest score is compared to the mean of every earlier score. A single
/// result has no prior mean and is `Insufficient`.
///
/// ```
/// use subject_recommender::analytics::{classify_trend, Trend};
///
/// assert_eq!(classify_trend(&[70.0], 10.0), Trend::Insufficient);
/// assert_eq!(classify_trend(&[80.0, 60.0, 65.0], 10.0), Trend::Declining);
/// assert_eq!(classify_trend(&[50.0, 60.0, 75.0], 10.0), Trend::Improving);
/// assert_eq!(classify_trend(&[70.0, 75.0], 10.0), Trend::Stable);
/// ```
#[must_use]
pub fn classify_trend(scores: &[f64], improvement_margin: f64) -> Trend {
    let Some((&latest, prior)) = scores.split_last() else {
        return Trend::Insufficient;
    };
    if prior.is_empty() {
        return Trend::Insufficient;
    }

    let prior_mean = prior.iter().sum::<f64>() / prior.len() as f64;
    if latest < prior_mean {
        Trend::Declining
    } else if latest > prior_mean + improvement_margin {
        Trend::Improving
    } else {
        Trend::Stable
    }
}

/// Orders records oldest first; untimed records follow timed ones in input
/// order.
#[must_use]
pub fn chronological<'a>(records: &[&'a ExamResultRecord]) -> Vec<&'a ExamResultRecord> {
    let mut ordered = records.to_vec();
    ordered.sort_by_key(|r| (r.taken_at.is_none(), r.taken_at));
    ordered
}

/// Mean score of one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAverage {
    /// Subject name.
    pub subject: String,
    /// Mean score.
    pub average: f64,
    /// Results averaged.
    pub attempts: usize,
}

/// Per-subject means, subjects in first-appearance order.
#[must_use]
pub fn subject_averages(records: &[&ExamResultRecord]) -> Vec<SubjectAverage> {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for record in records {
        let entry = sums.entry(record.subject.as_str()).or_insert_with(|| {
            order.push(record.subject.as_str());
            (0.0, 0)
        });
        entry.0 += record.score;
        entry.1 += 1;
    }

    order
        .into_iter()
        .map(|subject| {
            let (sum, attempts) = sums[subject];
            SubjectAverage {
                subject: subject.to_string(),
                average: sum / attempts as f64,
                attempts,
            }
        })
        .collect()
}

/// Subjects whose mean is below `threshold`.
#[must_use]
pub fn weak_subjects(records: &[&ExamResultRecord], threshold: f64) -> Vec<SubjectAverage> {
    subject_averages(records)
        .into_iter()
        .filter(|avg| avg.average < threshold)
        .collect()
}

/// Results where the learner used more than `utilization` of the allowed
/// time. Results without both timing fields are not counted.
#[must_use]
pub fn slow_exam_count(records: &[&ExamResultRecord], utilization: f64) -> usize {
    records
        .iter()
        .filter_map(|r| Some((r.time_taken_minutes?, r.duration_minutes?)))
        .filter(|&(taken, allowed)| allowed > 0.0 && taken / allowed > utilization)
        .count()
}

/// A learner's subject mean against everyone else's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerComparison {
    /// Subject name.
    pub subject: String,
    /// The learner's mean.
    pub learner_average: f64,
    /// Mean over all other learners' results (`0.0` if none).
    pub peer_average: f64,
    /// `learner_average - peer_average`.
    pub difference: f64,
}

/// Compares `learner_id` with every other learner, per subject the learner
/// took.
#[must_use]
pub fn peer_comparison(learner_id: &str, records: &[ExamResultRecord]) -> Vec<PeerComparison> {
    let (own, peers): (Vec<&ExamResultRecord>, Vec<&ExamResultRecord>) =
        records.iter().partition(|r| r.learner_id == learner_id);

    let peer_averages: HashMap<String, f64> = subject_averages(&peers)
        .into_iter()
        .map(|avg| (avg.subject, avg.average))
        .collect();

    subject_averages(&own)
        .into_iter()
        .map(|avg| {
            let peer_average = peer_averages.get(&avg.subject).copied().unwrap_or(0.0);
            PeerComparison {
                difference: avg.average - peer_average,
                learner_average: avg.average,
                peer_average,
                subject: avg.subject,
            }
        })
        .collect()
}

/// Kind of advice carried by an [`Insight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// No results yet.
    General,
    /// A weak subject.
    Subject,
    /// Running out of time.
    Time,
    /// Score trend.
    Trend,
}

/// Urgency of an [`Insight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Act now.
    High,
    /// Worth attention.
    Medium,
    /// Informational.
    Low,
}

/// One piece of human-readable advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// What the advice is about.
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// Short heading.
    pub title: String,
    /// Full sentence.
    pub description: String,
    /// Urgency.
    pub priority: Priority,
    /// Subject concerned, for subject advice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl Insight {
    fn new(kind: InsightKind, priority: Priority, title: &str, description: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description,
            priority,
            subject: None,
        }
    }
}

/// Everything known about one learner's performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerInsights {
    /// Learner analysed.
    pub learner_id: String,
    /// The learner's results considered.
    pub results_analyzed: usize,
    /// Subjects with a weak mean.
    pub weak_subjects: Vec<SubjectAverage>,
    /// Results with time pressure.
    pub slow_exams: usize,
    /// Latest score against prior scores.
    pub trend: Trend,
    /// Per-subject standing against other learners.
    pub peer_comparison: Vec<PeerComparison>,
    /// Advice derived from the above.
    pub insights: Vec<Insight>,
}

/// Analyses `learner_id` against the full record set.
#[must_use]
pub fn learner_insights(
    learner_id: &str,
    records: &[ExamResultRecord],
    config: &AnalyticsConfig,
) -> LearnerInsights {
    let own: Vec<&ExamResultRecord> = records
        .iter()
        .filter(|r| r.learner_id == learner_id)
        .collect();

    let weak = weak_subjects(&own, config.weak_threshold);
    let slow_exams = slow_exam_count(&own, config.time_utilization);
    let scores: Vec<f64> = chronological(&own).iter().map(|r| r.score).collect();
    let trend = classify_trend(&scores, config.improvement_margin);

    let mut insights = Vec::new();
    if own.is_empty() {
        insights.push(Insight::new(
            InsightKind::General,
            Priority::High,
            "Start taking exams",
            "Take a few exams to unlock personalised advice.".to_string(),
        ));
    }
    for avg in &weak {
        let name = avg.subject.replace('_', " ");
        insights.push(Insight {
            subject: Some(avg.subject.clone()),
            ..Insight::new(
                InsightKind::Subject,
                Priority::High,
                &format!("Improve {name} performance"),
                format!(
                    "Your average in {name} is {:.1}%. \
                     Extra practice here will lift your overall results.",
                    avg.average
                ),
            )
        });
    }
    if slow_exams > 0 {
        insights.push(Insight::new(
            InsightKind::Time,
            Priority::Medium,
            "Improve time management",
            format!(
                "You used almost all of the allotted time in {slow_exams} exam(s). \
                 Practise pacing."
            ),
        ));
    }
    match trend {
        Trend::Declining => insights.push(Insight::new(
            InsightKind::Trend,
            Priority::High,
            "Performance declining",
            "Your latest score is below your earlier average. Review your study routine."
                .to_string(),
        )),
        Trend::Improving => insights.push(Insight::new(
            InsightKind::Trend,
            Priority::Low,
            "Great improvement",
            "Your latest score is well above your earlier average. Keep it up.".to_string(),
        )),
        Trend::Stable | Trend::Insufficient => {}
    }

    LearnerInsights {
        learner_id: learner_id.to_string(),
        results_analyzed: own.len(),
        weak_subjects: weak,
        slow_exams,
        trend,
        peer_comparison: peer_comparison(learner_id, records),
        insights,
    }
}

/// Mean score of one subject in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAverage {
    /// `YYYY-MM`.
    pub month: String,
    /// Mean score.
    pub average: f64,
    /// Results averaged.
    pub attempts: usize,
}

/// Monthly averages of one subject, months ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectTrend {
    /// Subject name.
    pub subject: String,
    /// One entry per month with timestamped results.
    pub months: Vec<MonthlyAverage>,
}

/// Cohort-wide monthly trends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceTrends {
    /// Results considered.
    pub total_results: usize,
    /// Every subject seen, in first-appearance order.
    pub subjects: Vec<String>,
    /// Per-subject monthly averages, in `subjects` order.
    pub monthly_trends: Vec<SubjectTrend>,
}

/// Groups results by subject and calendar month (UTC). Results without a
/// timestamp count towards `subjects` but not towards any month.
#[must_use]
pub fn performance_trends(records: &[ExamResultRecord]) -> PerformanceTrends {
    let mut subjects: Vec<String> = Vec::new();
    let mut by_subject: HashMap<&str, BTreeMap<String, (f64, usize)>> = HashMap::new();

    for record in records {
        let months = by_subject.entry(record.subject.as_str()).or_insert_with(|| {
            subjects.push(record.subject.clone());
            BTreeMap::new()
        });
        if let Some(taken_at) = record.taken_at {
            let cell = months
                .entry(taken_at.format("%Y-%m").to_string())
                .or_insert((0.0, 0));
            cell.0 += record.score;
            cell.1 += 1;
        }
    }

    let monthly_trends = subjects
        .iter()
        .map(|subject| SubjectTrend {
            subject: subject.clone(),
            months: by_subject
                .remove(subject.as_str())
                .unwrap_or_default()
                .into_iter()
                .map(|(month, (sum, attempts))| MonthlyAverage {
                    month,
                    average: sum / attempts as f64,
                    attempts,
                })
                .collect(),
        })
        .collect();

    PerformanceTrends {
        total_results: records.len(),
        subjects,
        monthly_trends,
    }
}
