//! Focus timer command implementation.

use std::io::Write;
use std::time::Duration as StdDuration;

use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::args::{FocusCommands, OutputFormat};
use crate::config::Config;
use crate::core::{Clock, SystemClock};
use crate::error::EdudeskError;
use crate::features::focus::{
    format_duration, render_progress_bar, FocusReport, FocusStorage, FocusTimer, SessionKind,
    TimerSettings,
};
use crate::output::{format_history, format_report, format_timer_status, to_json};

/// Execute focus subcommands.
///
/// # Errors
///
/// Returns an error if storage or configuration fails, or an argument is
/// rejected.
pub fn focus(
    cmd: FocusCommands,
    config: &mut Config,
    format: OutputFormat,
) -> Result<String, EdudeskError> {
    let storage = FocusStorage::new()?;
    let timer = storage.load(config.focus.timer_settings(), SystemClock)?;

    match cmd {
        FocusCommands::Run { plain } => {
            let timer = if plain {
                run_plain(timer, &storage)?
            } else {
                crate::tui::run(timer, &storage)?
            };
            storage.save(&timer)?;
            format_timer_status(&timer.status(), format)
        }

        FocusCommands::Status => format_timer_status(&timer.status(), format),

        FocusCommands::Stats { date } => show_stats(&timer, date.as_deref(), format),

        FocusCommands::History { limit } => {
            let history = timer.history();
            let start = history.len().saturating_sub(limit);
            format_history(&history[start..], format)
        }

        FocusCommands::Config {
            focus_minutes,
            break_minutes,
        } => {
            let settings = apply_timer_config(config, focus_minutes, break_minutes)?;
            config.save()?;

            match format {
                OutputFormat::Json => to_json(&settings),
                OutputFormat::Pretty => Ok(format!(
                    "{} focus {}, break {}",
                    "Timer set:".green(),
                    format_duration(chrono::Duration::minutes(i64::from(settings.focus_minutes))),
                    format_duration(chrono::Duration::minutes(i64::from(settings.break_minutes)))
                )),
            }
        }

        FocusCommands::Clear { force } => {
            if !force {
                return Err(EdudeskError::InvalidArgument(
                    "This will delete all focus history.\nUse --force to confirm.".to_string(),
                ));
            }
            storage.clear()?;
            Ok("Focus history cleared.".to_string())
        }
    }
}

/// Update interval lengths in `config`, rejecting zero-minute values.
fn apply_timer_config(
    config: &mut Config,
    focus_minutes: Option<u32>,
    break_minutes: Option<u32>,
) -> Result<TimerSettings, EdudeskError> {
    for (name, minutes) in [("focus", focus_minutes), ("break", break_minutes)] {
        if minutes == Some(0) {
            return Err(EdudeskError::InvalidArgument(format!(
                "Invalid {name} length: 0. Expected at least 1 minute"
            )));
        }
    }

    if let Some(minutes) = focus_minutes {
        config.focus.focus_minutes = minutes;
    }
    if let Some(minutes) = break_minutes {
        config.focus.break_minutes = minutes;
    }
    Ok(config.focus.timer_settings())
}

fn show_stats<C: Clock>(
    timer: &FocusTimer<C>,
    date: Option<&str>,
    format: OutputFormat,
) -> Result<String, EdudeskError> {
    let day = match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|e| {
            EdudeskError::InvalidArgument(format!("Invalid date {d}: {e}. Expected YYYY-MM-DD"))
        })?,
        None => timer.today(),
    };

    let report = FocusReport::generate(timer.history(), timer.now(), day);
    format_report(&report, format)
}

/// Count down the current interval on stdout, one line per second.
fn run_plain<C: Clock>(
    mut timer: FocusTimer<C>,
    storage: &FocusStorage,
) -> Result<FocusTimer<C>, EdudeskError> {
    let kind = timer.kind();
    timer.start();

    let mut stderr = std::io::stderr();
    loop {
        let line = format!(
            "\r{} {} {}",
            kind,
            timer.format_remaining().bold(),
            render_progress_bar(timer.progress(), 30)
        );
        stderr.write_all(line.as_bytes())?;
        stderr.flush()?;

        std::thread::sleep(StdDuration::from_secs(1));

        if let Some(record) = timer.tick() {
            storage.save(&timer)?;
            let done = match record.kind {
                SessionKind::Focus => "Focus complete! Time for a break.",
                SessionKind::Break => "Break over. Ready to focus?",
            };
            writeln!(stderr, "\n{}", done.green())?;
            return Ok(timer);
        }
    }
}
