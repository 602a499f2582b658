use chrono::Datelike;
use chrono::Local;
use chrono::TimeZone;
use chrono::Utc;

use crate::model::Run;

const VERSION_PREFIX_LEN: usize = 7;

/// The timezone in which run dates are turned into calendar days.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LabelZone {
    /// The timezone of the machine generating the labels.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
}

/// Creates the axis labels of the runs, e.g. `abcdef1 (3/5)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Labeler {
    zone: LabelZone,
}

impl Labeler {
    /// Creates a labeler for the given timezone.
    pub fn new(zone: LabelZone) -> Labeler {
        Self { zone }
    }

    /// Creates the label of a single run: the first seven characters of
    /// the version followed by the month and day of the run.
    pub fn label(&self, run: &Run) -> String {
        let version: String = run.version.chars().take(VERSION_PREFIX_LEN).collect();

        let day = match self.zone {
            LabelZone::Local => month_day(&Local, run.timestamp_millis()),
            LabelZone::Utc => month_day(&Utc, run.timestamp_millis()),
        };

        match day {
            Some((month, day)) => format!("{version} ({month}/{day})"),
            None => format!("{version} (NaN/NaN)"),
        }
    }

    /// Creates the labels of all runs, in order.
    pub fn labels(&self, runs: &[Run]) -> Vec<String> {
        runs.iter().map(|run| self.label(run)).collect()
    }
}

fn month_day<Tz: TimeZone>(zone: &Tz, millis: i64) -> Option<(u32, u32)> {
    zone.timestamp_millis_opt(millis)
        .earliest()
        .map(|dt| (dt.month(), dt.day()))
}
