//! Statistics derived from the completed-session history.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::session::{FocusRecord, SessionKind};
use super::timer::format_duration;

/// Length of the trailing window used by [`weekly_stats`].
pub const WEEK: Duration = Duration::days(7);

/// Completed sessions in the trailing week, split by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// Completed focus intervals
    pub focus_sessions: usize,
    /// Completed breaks
    pub break_sessions: usize,
    /// Minutes spent in completed focus intervals
    pub focus_minutes: u32,
}

/// Number of focus intervals completed on `date` (local calendar day).
#[must_use]
pub fn daily_completed_cycles(history: &[FocusRecord], date: NaiveDate) -> usize {
    history
        .iter()
        .filter(|r| r.kind == SessionKind::Focus && r.completed_on() == date)
        .count()
}

/// Minutes of completed focus on `date` (local calendar day).
#[must_use]
pub fn focus_minutes_on(history: &[FocusRecord], date: NaiveDate) -> u32 {
    history
        .iter()
        .filter(|r| r.kind == SessionKind::Focus && r.completed_on() == date)
        .map(|r| r.duration_minutes)
        .sum()
}

/// Sessions completed within the 7 days before `now`.
#[must_use]
pub fn weekly_stats(history: &[FocusRecord], now: DateTime<Utc>) -> WeeklyStats {
    let since = now - WEEK;
    history
        .iter()
        .filter(|r| r.completed_at > since && r.completed_at <= now)
        .fold(WeeklyStats::default(), |mut stats, record| {
            match record.kind {
                SessionKind::Focus => {
                    stats.focus_sessions += 1;
                    stats.focus_minutes += record.duration_minutes;
                }
                SessionKind::Break => stats.break_sessions += 1,
            }
            stats
        })
}

/// Focus activity on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFocus {
    /// Local calendar day
    pub date: NaiveDate,
    /// Completed focus intervals
    pub sessions: usize,
    /// Focus minutes
    pub minutes: u32,
}

/// Summary report over the trailing week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusReport {
    /// Day the report was generated for
    pub today: NaiveDate,
    /// Focus intervals completed today
    pub today_cycles: usize,
    /// Trailing-week totals
    pub week: WeeklyStats,
    /// Days with focus activity, most recent first
    pub daily: Vec<DailyFocus>,
    /// Consecutive days with at least one focus interval, ending today or yesterday
    pub streak_days: u32,
}

impl FocusReport {
    /// Build a report from the history as of `now`.
    #[must_use]
    pub fn generate(history: &[FocusRecord], now: DateTime<Utc>, today: NaiveDate) -> Self {
        let since = now - WEEK;
        let mut by_day: BTreeMap<NaiveDate, (usize, u32)> = BTreeMap::new();
        for record in history
            .iter()
            .filter(|r| r.kind == SessionKind::Focus && r.completed_at > since)
        {
            let entry = by_day.entry(record.completed_on()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += record.duration_minutes;
        }

        let daily = by_day
            .into_iter()
            .rev()
            .map(|(date, (sessions, minutes))| DailyFocus {
                date,
                sessions,
                minutes,
            })
            .collect();

        Self {
            today,
            today_cycles: daily_completed_cycles(history, today),
            week: weekly_stats(history, now),
            daily,
            streak_days: streak_days(history, today),
        }
    }

    /// Format the report for display.
    #[must_use]
    pub fn format(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("📊 Focus Report: week ending {}", self.today));
        lines.push("═".repeat(50));
        lines.push(String::new());

        lines.push("Summary".to_string());
        lines.push("─".repeat(40));
        lines.push(format!("  Cycles today:        {}", self.today_cycles));
        lines.push(format!(
            "  Focus this week:     {}",
            format_duration(Duration::minutes(i64::from(self.week.focus_minutes)))
        ));
        lines.push(format!("  Focus sessions:      {}", self.week.focus_sessions));
        lines.push(format!("  Breaks taken:        {}", self.week.break_sessions));
        lines.push(format!("  Current streak:      {} days", self.streak_days));

        if !self.daily.is_empty() {
            lines.push(String::new());
            lines.push("Recent Days".to_string());
            lines.push("─".repeat(40));
            for day in &self.daily {
                lines.push(format!(
                    "  {} {:>4}m ({} sessions)",
                    day.date, day.minutes, day.sessions
                ));
            }
        }

        lines.join("\n")
    }
}

/// Consecutive days with focus activity, counting back from `today`.
///
/// A streak survives a day with no activity yet: if today is empty the count
/// starts from yesterday.
#[must_use]
pub fn streak_days(history: &[FocusRecord], today: NaiveDate) -> u32 {
    let dates: std::collections::BTreeSet<NaiveDate> = history
        .iter()
        .filter(|r| r.kind == SessionKind::Focus)
        .map(FocusRecord::completed_on)
        .collect();

    let mut check = today;
    if !dates.contains(&check) {
        check -= Duration::days(1);
    }

    let mut streak = 0;
    while dates.contains(&check) {
        streak += 1;
        check -= Duration::days(1);
    }
    streak
}
