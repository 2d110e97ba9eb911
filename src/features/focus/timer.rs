//! The focus/break timer state machine.
//!
//! The countdown is anchored to the clock rather than to a tick count: each
//! [`FocusTimer::tick`] recomputes the remaining time from the instant the timer
//! was (re)started, so a host that was suspended catches up in one tick.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::session::{FocusRecord, SessionKind};
use super::stats::{self, WeeklyStats};
use crate::core::{Clock, SystemClock};

/// Timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Stopped, waiting to be started
    Idle,
    /// Counting down
    Running,
    /// Countdown suspended
    Paused,
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
        }
    }
}

/// Configured interval lengths, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Focus interval length
    pub focus_minutes: u32,
    /// Break interval length
    pub break_minutes: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            break_minutes: 5,
        }
    }
}

impl TimerSettings {
    /// Configured minutes for a session kind, never less than one.
    #[must_use]
    pub fn minutes_for(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Focus => self.focus_minutes,
            SessionKind::Break => self.break_minutes,
        }
        .max(1)
    }

    /// Configured seconds for a session kind.
    #[must_use]
    pub fn seconds_for(&self, kind: SessionKind) -> u32 {
        self.minutes_for(kind).saturating_mul(60)
    }
}

/// Read-only view of the timer for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerStatus {
    /// Current state
    pub state: TimerState,
    /// Whether the countdown is running
    pub is_running: bool,
    /// Whether the countdown is paused
    pub is_paused: bool,
    /// Current session kind
    pub kind: SessionKind,
    /// Seconds left in the current interval
    pub remaining_seconds: u32,
    /// Configured length of the current interval in seconds
    pub total_seconds: u32,
    /// Current cycle number, starting at 1
    pub cycle: u32,
    /// Elapsed share of the interval, 0 to 100
    pub progress_percent: f64,
}

/// Persistent part of a [`FocusTimer`].
///
/// The running state is not included: a restored timer is idle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusSnapshot {
    /// Interval lengths
    pub settings: TimerSettings,
    /// Kind of the upcoming interval
    pub kind: SessionKind,
    /// Current cycle number
    pub cycle: u32,
    /// Focus intervals completed on `counted_day`
    pub completed_today: u32,
    /// Day `completed_today` refers to
    pub counted_day: Option<NaiveDate>,
    /// Focus intervals completed ever
    pub total_completed: u32,
    /// Completed intervals, oldest first
    pub history: Vec<FocusRecord>,
}

impl Default for FocusSnapshot {
    fn default() -> Self {
        Self {
            settings: TimerSettings::default(),
            kind: SessionKind::Focus,
            cycle: 1,
            completed_today: 0,
            counted_day: None,
            total_completed: 0,
            history: Vec::new(),
        }
    }
}

/// Pomodoro-style timer cycling between focus and break intervals.
#[derive(Debug)]
pub struct FocusTimer<C: Clock = SystemClock> {
    clock: C,
    settings: TimerSettings,
    state: TimerState,
    kind: SessionKind,
    /// Exact time left, not rounded to seconds.
    remaining: Duration,
    /// Instant the countdown was last (re)started, while running.
    running_since: Option<DateTime<Utc>>,
    /// Time left at `running_since`.
    remaining_at_start: Duration,
    cycle: u32,
    completed_today: u32,
    counted_day: Option<NaiveDate>,
    total_completed: u32,
    history: Vec<FocusRecord>,
}

impl FocusTimer<SystemClock> {
    /// Create an idle timer on the wall clock.
    #[must_use]
    pub fn new(settings: TimerSettings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> FocusTimer<C> {
    /// Create an idle timer, starting with a focus interval.
    #[must_use]
    pub fn with_clock(settings: TimerSettings, clock: C) -> Self {
        Self::restore(
            FocusSnapshot {
                settings,
                ..FocusSnapshot::default()
            },
            clock,
        )
    }

    /// Rebuild an idle timer from persisted state.
    #[must_use]
    pub fn restore(snapshot: FocusSnapshot, clock: C) -> Self {
        Self {
            clock,
            settings: snapshot.settings,
            state: TimerState::Idle,
            kind: snapshot.kind,
            remaining: interval(snapshot.settings, snapshot.kind),
            running_since: None,
            remaining_at_start: Duration::zero(),
            cycle: snapshot.cycle.max(1),
            completed_today: snapshot.completed_today,
            counted_day: snapshot.counted_day,
            total_completed: snapshot.total_completed,
            history: snapshot.history,
        }
    }

    /// Copy out the persistent state.
    #[must_use]
    pub fn snapshot(&self) -> FocusSnapshot {
        FocusSnapshot {
            settings: self.settings,
            kind: self.kind,
            cycle: self.cycle,
            completed_today: self.completed_today,
            counted_day: self.counted_day,
            total_completed: self.total_completed,
            history: self.history.clone(),
        }
    }

    /// Start or resume the countdown.
    pub fn start(&mut self) {
        if self.state == TimerState::Running {
            return;
        }
        self.running_since = Some(self.clock.now());
        self.remaining_at_start = self.remaining;
        self.state = TimerState::Running;
        debug!(kind = %self.kind, remaining = self.remaining_seconds(), "timer started");
    }

    /// Pause the countdown.
    ///
    /// If the interval ran out since the last tick, it completes instead.
    pub fn pause(&mut self) {
        if self.state != TimerState::Running {
            return;
        }
        self.resync();
        if self.is_expired() {
            self.complete();
            return;
        }
        self.running_since = None;
        self.state = TimerState::Paused;
        debug!(kind = %self.kind, remaining = self.remaining_seconds(), "timer paused");
    }

    /// Stop and rewind the current interval to its full length.
    ///
    /// The session kind is kept.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.running_since = None;
        self.remaining = interval(self.settings, self.kind);
        debug!(kind = %self.kind, "timer reset");
    }

    /// Advance the countdown to the clock's current time.
    ///
    /// Drive this about once per second while running. Returns the completed
    /// record if the interval just finished.
    pub fn tick(&mut self) -> Option<FocusRecord> {
        if self.state != TimerState::Running {
            return None;
        }
        self.resync();
        if self.is_expired() {
            Some(self.complete())
        } else {
            None
        }
    }

    fn resync(&mut self) {
        if let Some(since) = self.running_since {
            let elapsed = (self.clock.now() - since).max(Duration::zero());
            self.remaining = (self.remaining_at_start - elapsed).max(Duration::zero());
        }
    }

    fn is_expired(&self) -> bool {
        self.remaining <= Duration::zero()
    }

    /// Finish the current interval now.
    ///
    /// Appends a record to the history, counts finished focus intervals, and
    /// switches to the other kind, idle.
    pub fn complete(&mut self) -> FocusRecord {
        let now = self.clock.now();
        let record = FocusRecord {
            kind: self.kind,
            duration_minutes: self.settings.minutes_for(self.kind),
            completed_at: now,
        };
        self.history.push(record.clone());

        if self.kind == SessionKind::Focus {
            let today = self.clock.today();
            if self.counted_day != Some(today) {
                self.counted_day = Some(today);
                self.completed_today = 0;
            }
            self.completed_today += 1;
            self.total_completed += 1;
            self.cycle += 1;
        }

        debug!(
            kind = %record.kind,
            minutes = record.duration_minutes,
            cycle = self.cycle,
            "session completed"
        );

        self.state = TimerState::Idle;
        self.running_since = None;
        self.switch_session();
        record
    }

    /// Toggle between focus and break, idle, with a full interval.
    pub fn switch_session(&mut self) {
        self.kind = self.kind.toggled();
        self.state = TimerState::Idle;
        self.running_since = None;
        self.remaining = interval(self.settings, self.kind);
        debug!(kind = %self.kind, "switched session");
    }

    /// Change the interval lengths.
    ///
    /// An idle timer picks up the new length immediately; a running or paused
    /// one keeps its current countdown.
    pub fn configure(&mut self, settings: TimerSettings) {
        self.settings = settings;
        if self.state == TimerState::Idle {
            self.remaining = interval(self.settings, self.kind);
        }
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> TimerSettings {
        self.settings
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Current session kind.
    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Check if the timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Check if the timer is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state == TimerState::Paused
    }

    /// Seconds left as of the last tick, rounded up.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        let millis = self.remaining.num_milliseconds().max(0);
        u32::try_from((millis + 999) / 1000).unwrap_or(u32::MAX)
    }

    /// Remaining time in whole seconds, as displayed.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::seconds(i64::from(self.remaining_seconds()))
    }

    /// Current cycle number, starting at 1.
    #[must_use]
    pub const fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Focus intervals completed today.
    #[must_use]
    pub fn completed_today(&self) -> u32 {
        if self.counted_day == Some(self.clock.today()) {
            self.completed_today
        } else {
            0
        }
    }

    /// Focus intervals completed ever.
    #[must_use]
    pub const fn total_completed(&self) -> u32 {
        self.total_completed
    }

    /// Completed intervals, oldest first.
    #[must_use]
    pub fn history(&self) -> &[FocusRecord] {
        &self.history
    }

    /// Elapsed share of the current interval (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let (total, remaining) = (
            interval(self.settings, self.kind).num_milliseconds() as f64,
            self.remaining.num_milliseconds() as f64,
        );
        ((total - remaining) / total).clamp(0.0, 1.0)
    }

    /// Elapsed share of the current interval as a percentage (0 - 100).
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        (self.progress() * 100.0).clamp(0.0, 100.0)
    }

    /// Snapshot of the countdown for display.
    #[must_use]
    pub fn status(&self) -> TimerStatus {
        TimerStatus {
            state: self.state,
            is_running: self.is_running(),
            is_paused: self.is_paused(),
            kind: self.kind,
            remaining_seconds: self.remaining_seconds(),
            total_seconds: self.settings.seconds_for(self.kind),
            cycle: self.cycle,
            progress_percent: self.progress_percent(),
        }
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_duration_mmss(self.remaining())
    }

    /// Focus intervals completed on a local calendar day.
    #[must_use]
    pub fn daily_completed_cycles(&self, date: NaiveDate) -> usize {
        stats::daily_completed_cycles(&self.history, date)
    }

    /// Minutes of focus completed on a local calendar day.
    #[must_use]
    pub fn focus_minutes_on(&self, date: NaiveDate) -> u32 {
        stats::focus_minutes_on(&self.history, date)
    }

    /// Sessions completed in the trailing 7 days.
    #[must_use]
    pub fn weekly_stats(&self) -> WeeklyStats {
        stats::weekly_stats(&self.history, self.clock.now())
    }

    /// Today's local date according to the timer's clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Current instant according to the timer's clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

fn interval(settings: TimerSettings, kind: SessionKind) -> Duration {
    Duration::seconds(i64::from(settings.seconds_for(kind)))
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let plural = |n: i64| if n == 1 { "" } else { "s" };

    match (hours, minutes) {
        (0, m) => format!("{m} minute{}", plural(m)),
        (h, 0) => format!("{h} hour{}", plural(h)),
        (h, m) => format!("{h} hour{}, {m} minute{}", plural(h), plural(m)),
    }
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use chrono::{Local, TimeZone};

    fn start() -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(2024, 4, 10, 9, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn timer() -> (FocusTimer<ManualClock>, ManualClock) {
        let clock = ManualClock::new(start());
        (
            FocusTimer::with_clock(TimerSettings::default(), clock.clone()),
            clock,
        )
    }

    #[test]
    fn test_timer_new() {
        let (timer, _clock) = timer();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.kind(), SessionKind::Focus);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert_eq!(timer.cycle(), 1);
        assert!(!timer.is_running());
        assert!(!timer.is_paused());
    }

    #[test]
    fn test_full_focus_interval() {
        let (mut timer, clock) = timer();
        timer.start();

        let mut completions = Vec::new();
        for _ in 0..1500 {
            clock.advance(Duration::seconds(1));
            if let Some(record) = timer.tick() {
                completions.push(record);
            }
        }

        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].kind, SessionKind::Focus);
        assert_eq!(completions[0].duration_minutes, 25);
        assert_eq!(timer.daily_completed_cycles(clock.today()), 1);
        assert_eq!(timer.kind(), SessionKind::Break);
        assert_eq!(timer.remaining_seconds(), 300);
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.cycle(), 2);
        assert_eq!(timer.completed_today(), 1);
        assert_eq!(timer.total_completed(), 1);
    }

    #[test]
    fn test_tick_counts_down_each_second() {
        let (mut timer, clock) = timer();
        timer.start();

        for expected in (1490..1500).rev() {
            clock.advance(Duration::seconds(1));
            assert!(timer.tick().is_none());
            assert_eq!(timer.remaining_seconds(), expected);
        }
    }

    #[test]
    fn test_suspension_gap_catches_up_exactly() {
        let (mut timer, clock) = timer();
        timer.start();

        clock.advance(Duration::seconds(3));
        timer.tick();
        assert_eq!(timer.remaining_seconds(), 1497);

        // Host suspended for ten minutes: no ticks delivered.
        clock.advance(Duration::minutes(10));
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 1497 - 600);

        // A gap longer than what is left completes exactly once.
        clock.advance(Duration::hours(2));
        assert!(timer.tick().is_some());
        assert!(timer.tick().is_none());
        assert_eq!(timer.history().len(), 1);
        assert_eq!(timer.kind(), SessionKind::Break);
        assert_eq!(timer.remaining_seconds(), 300);
    }

    #[test]
    fn test_tick_without_start_does_nothing() {
        let (mut timer, clock) = timer();
        clock.advance(Duration::minutes(30));
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_pause_freezes_countdown() {
        let (mut timer, clock) = timer();
        timer.start();
        clock.advance(Duration::seconds(100));
        timer.pause();
        assert!(timer.is_paused());
        assert_eq!(timer.remaining_seconds(), 1400);

        clock.advance(Duration::minutes(5));
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 1400);

        timer.start();
        assert!(timer.is_running());
        clock.advance(Duration::seconds(10));
        timer.tick();
        assert_eq!(timer.remaining_seconds(), 1390);
    }

    #[test]
    fn test_short_runs_between_pauses_add_up() {
        let clock = ManualClock::new(start());
        let settings = TimerSettings {
            focus_minutes: 1,
            break_minutes: 1,
        };
        let mut timer = FocusTimer::with_clock(settings, clock.clone());

        // 66 runs of 900 ms: 59.4 s counted, 0.6 s left.
        for _ in 0..66 {
            timer.start();
            clock.advance(Duration::milliseconds(900));
            timer.pause();
        }
        assert!(timer.history().is_empty());
        assert!(timer.is_paused());
        assert_eq!(timer.remaining_seconds(), 1);

        timer.start();
        clock.advance(Duration::milliseconds(900));
        timer.pause();
        assert_eq!(timer.history().len(), 1);
        assert_eq!(timer.kind(), SessionKind::Break);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_sub_second_runs_around_pause() {
        let (mut timer, clock) = timer();
        timer.start();
        clock.advance(Duration::milliseconds(900));
        timer.pause();
        assert_eq!(timer.remaining_seconds(), 1500);

        timer.start();
        clock.advance(Duration::milliseconds(900));
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 1499);

        clock.advance(Duration::milliseconds(200));
        timer.tick();
        assert_eq!(timer.remaining_seconds(), 1498);
    }

    #[test]
    fn test_pause_after_expiry_completes() {
        let (mut timer, clock) = timer();
        timer.start();
        clock.advance(Duration::minutes(26));
        timer.pause();

        assert_eq!(timer.history().len(), 1);
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.kind(), SessionKind::Break);
    }

    #[test]
    fn test_start_while_running_keeps_anchor() {
        let (mut timer, clock) = timer();
        timer.start();
        clock.advance(Duration::seconds(30));
        timer.start();
        clock.advance(Duration::seconds(30));
        timer.tick();
        assert_eq!(timer.remaining_seconds(), 1440);
    }

    #[test]
    fn test_reset_from_every_state() {
        let (mut timer, clock) = timer();

        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_seconds(), 1500);

        timer.start();
        clock.advance(Duration::seconds(42));
        timer.tick();
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert_eq!(timer.kind(), SessionKind::Focus);

        timer.complete();
        timer.start();
        clock.advance(Duration::seconds(20));
        timer.pause();
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.kind(), SessionKind::Break);
        assert_eq!(timer.remaining_seconds(), 300);
    }

    #[test]
    fn test_break_completion_does_not_count_cycle() {
        let (mut timer, _clock) = timer();
        timer.complete();
        let record = timer.complete();

        assert_eq!(record.kind, SessionKind::Break);
        assert_eq!(record.duration_minutes, 5);
        assert_eq!(timer.cycle(), 2);
        assert_eq!(timer.total_completed(), 1);
        assert_eq!(timer.kind(), SessionKind::Focus);
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_switch_session_not_auto_started() {
        let (mut timer, _clock) = timer();
        timer.start();
        timer.switch_session();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.kind(), SessionKind::Break);
        assert_eq!(timer.remaining_seconds(), 300);
        assert!(timer.history().is_empty());
    }

    #[test]
    fn test_completed_today_rolls_over() {
        let (mut timer, clock) = timer();
        timer.complete();
        assert_eq!(timer.completed_today(), 1);

        clock.advance(Duration::days(1));
        assert_eq!(timer.completed_today(), 0);
        timer.complete();
        timer.complete();
        assert_eq!(timer.completed_today(), 1);
        assert_eq!(timer.total_completed(), 2);
    }

    #[test]
    fn test_weekly_stats_through_timer() {
        let (mut timer, clock) = timer();
        timer.complete();
        timer.complete();
        clock.advance(Duration::days(8));
        timer.complete();

        let stats = timer.weekly_stats();
        assert_eq!(stats.focus_sessions, 1);
        assert_eq!(stats.break_sessions, 0);
    }

    #[test]
    fn test_progress() {
        let clock = ManualClock::new(start());
        let settings = TimerSettings {
            focus_minutes: 10,
            break_minutes: 2,
        };
        let mut timer = FocusTimer::with_clock(settings, clock.clone());
        assert!(timer.progress().abs() < f64::EPSILON);

        timer.start();
        clock.advance(Duration::seconds(300));
        timer.tick();
        assert!((timer.progress() - 0.5).abs() < 0.001);
        assert!((timer.progress_percent() - 50.0).abs() < 0.1);

        // Shrinking the interval mid-run never pushes progress past 100%.
        timer.configure(TimerSettings {
            focus_minutes: 1,
            break_minutes: 1,
        });
        assert!((timer.progress_percent() - 0.0).abs() < f64::EPSILON);
        timer.configure(settings);
        let status = timer.status();
        assert!(status.is_running);
        assert_eq!(status.total_seconds, 600);
        assert_eq!(status.remaining_seconds, 300);
    }

    #[test]
    fn test_configure_idle_updates_remaining() {
        let (mut timer, _clock) = timer();
        timer.configure(TimerSettings {
            focus_minutes: 50,
            break_minutes: 10,
        });
        assert_eq!(timer.remaining_seconds(), 3000);
    }

    #[test]
    fn test_zero_minute_settings_clamped() {
        let settings = TimerSettings {
            focus_minutes: 0,
            break_minutes: 0,
        };
        assert_eq!(settings.seconds_for(SessionKind::Focus), 60);
        assert_eq!(settings.minutes_for(SessionKind::Break), 1);
    }

    #[test]
    fn test_snapshot_restore_is_idle() {
        let (mut timer, clock) = timer();
        timer.complete();
        timer.start();

        let snapshot = timer.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored = FocusTimer::restore(serde_json::from_str(&json).unwrap(), clock);

        assert_eq!(restored.state(), TimerState::Idle);
        assert_eq!(restored.kind(), SessionKind::Break);
        assert_eq!(restored.cycle(), 2);
        assert_eq!(restored.history().len(), 1);
        assert_eq!(restored.completed_today(), 1);
        assert_eq!(restored.remaining_seconds(), 300);
    }

    #[test]
    fn test_format_remaining() {
        let (mut timer, clock) = timer();
        assert_eq!(timer.format_remaining(), "25:00");
        timer.start();
        clock.advance(Duration::seconds(90));
        timer.tick();
        assert_eq!(timer.format_remaining(), "23:30");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
        assert_eq!(format_duration(Duration::seconds(45)), "45 seconds");
    }

    #[test]
    fn test_format_duration_mmss() {
        assert_eq!(format_duration_mmss(Duration::minutes(25)), "25:00");
        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert!(bar.contains("█████"));
        assert!(bar.contains("░░░░░"));
        assert_eq!(render_progress_bar(2.0, 4), "[████]");
    }
}
