//! Application state for the focus timer TUI.

use crate::core::{Clock, SystemClock};
use crate::error::EdudeskError;
use crate::features::focus::{FocusRecord, FocusStorage, FocusTimer, SessionKind};

/// Application state.
pub struct App<'a, C: Clock = SystemClock> {
    /// The timer being driven.
    pub timer: FocusTimer<C>,
    /// Where completed intervals are saved.
    storage: &'a FocusStorage,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<'a, C: Clock> App<'a, C> {
    /// Create a new app instance around a loaded timer.
    pub fn new(timer: FocusTimer<C>, storage: &'a FocusStorage) -> Self {
        Self {
            timer,
            storage,
            status: Some("Press space to start".to_string()),
            should_quit: false,
        }
    }

    /// Start or pause the countdown.
    ///
    /// # Errors
    ///
    /// Returns an error if pausing completed the interval and saving failed.
    pub fn toggle(&mut self) -> Result<(), EdudeskError> {
        if self.timer.is_running() {
            let before = self.timer.history().len();
            self.timer.pause();
            if self.timer.history().len() > before {
                let record = self.timer.history()[before].clone();
                return self.on_completed(&record);
            }
            self.status = Some("Paused".to_string());
        } else {
            self.timer.start();
            self.status = None;
        }
        Ok(())
    }

    /// Rewind the current interval.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.status = Some(format!("{} reset", self.timer.kind()));
    }

    /// Finish the current interval now.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails.
    pub fn skip(&mut self) -> Result<(), EdudeskError> {
        let record = self.timer.complete();
        self.on_completed(&record)
    }

    /// Advance the countdown to the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if an interval completed and saving failed.
    pub fn tick(&mut self) -> Result<(), EdudeskError> {
        match self.timer.tick() {
            Some(record) => self.on_completed(&record),
            None => Ok(()),
        }
    }

    fn on_completed(&mut self, record: &FocusRecord) -> Result<(), EdudeskError> {
        self.storage.save(&self.timer)?;
        self.status = Some(match record.kind {
            SessionKind::Focus => "Focus complete! Time for a break.".to_string(),
            SessionKind::Break => "Break over. Ready to focus?".to_string(),
        });
        Ok(())
    }

    /// Focus intervals completed today.
    #[must_use]
    pub fn cycles_today(&self) -> usize {
        self.timer.daily_completed_cycles(self.timer.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use crate::features::focus::TimerSettings;
    use crate::storage::{Database, SnapshotStore};
    use chrono::{Duration, Local, TimeZone, Utc};

    fn setup() -> (FocusStorage, ManualClock) {
        let storage = FocusStorage::with_snapshots(SnapshotStore::with_database(
            Database::open_in_memory().unwrap(),
        ));
        let clock = ManualClock::new(
            Local
                .with_ymd_and_hms(2024, 9, 2, 10, 0, 0)
                .unwrap()
                .with_timezone(&Utc),
        );
        (storage, clock)
    }

    #[test]
    fn test_toggle_starts_and_pauses() {
        let (storage, clock) = setup();
        let timer = FocusTimer::with_clock(TimerSettings::default(), clock.clone());
        let mut app = App::new(timer, &storage);

        app.toggle().unwrap();
        assert!(app.timer.is_running());

        clock.advance(Duration::seconds(10));
        app.tick().unwrap();
        app.toggle().unwrap();
        assert!(app.timer.is_paused());
        assert_eq!(app.timer.remaining_seconds(), 1490);
        assert_eq!(app.status.as_deref(), Some("Paused"));
    }

    #[test]
    fn test_completion_is_saved() {
        let (storage, clock) = setup();
        let timer = FocusTimer::with_clock(TimerSettings::default(), clock.clone());
        let mut app = App::new(timer, &storage);

        app.toggle().unwrap();
        clock.advance(Duration::minutes(25));
        app.tick().unwrap();

        assert_eq!(app.cycles_today(), 1);
        assert_eq!(app.timer.kind(), SessionKind::Break);
        assert!(app.status.as_deref().unwrap().contains("break"));

        let reloaded = storage.load(TimerSettings::default(), clock).unwrap();
        assert_eq!(reloaded.history().len(), 1);
    }

    #[test]
    fn test_pause_after_expiry_reports_completion() {
        let (storage, clock) = setup();
        let timer = FocusTimer::with_clock(TimerSettings::default(), clock.clone());
        let mut app = App::new(timer, &storage);

        app.toggle().unwrap();
        clock.advance(Duration::minutes(30));
        app.toggle().unwrap();

        assert!(!app.timer.is_running());
        assert_eq!(app.timer.history().len(), 1);
        assert!(app.status.as_deref().unwrap().contains("Focus complete"));
    }

    #[test]
    fn test_skip_and_reset() {
        let (storage, clock) = setup();
        let timer = FocusTimer::with_clock(TimerSettings::default(), clock);
        let mut app = App::new(timer, &storage);

        app.skip().unwrap();
        assert_eq!(app.timer.kind(), SessionKind::Break);
        app.skip().unwrap();
        assert_eq!(app.timer.kind(), SessionKind::Focus);
        assert!(app.status.as_deref().unwrap().contains("Break over"));

        app.reset();
        assert_eq!(app.timer.remaining_seconds(), 1500);
    }
}
