//! CSV output backend.
//!
//! Creates `census.csv` in the configured output directory, one row per
//! species per sampled tick.  Undefined percentages are written as empty
//! fields.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use mal_core::Tick;
use mal_sim::{SimObserver, World};

use crate::{Census, StatsError, StatsResult};

pub const CENSUS_FILE: &str = "census.csv";

const HEADER: [&str; 7] = [
    "tick",
    "species",
    "population",
    "infected",
    "infected_pct",
    "immune_pct",
    "vaccinated_pct",
];

/// Writes census rows to `census.csv`.
///
/// Also usable directly as a [`SimObserver`], writing one census per step.
/// Errors are stored because observer methods have no return value; check
/// with [`take_error`][Self::take_error] after the run.
pub struct CsvCensusWriter {
    path:       PathBuf,
    writer:     Writer<File>,
    finished:   bool,
    last_error: Option<StatsError>,
}

impl CsvCensusWriter {
    /// Create `dir/census.csv` and write the header row.
    pub fn new(dir: &Path) -> StatsResult<Self> {
        let path = dir.join(CENSUS_FILE);
        let mut writer = Writer::from_path(&path)?;
        writer.write_record(HEADER)?;
        Ok(Self { path, writer, finished: false, last_error: None })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_census(&mut self, census: &Census) -> StatsResult<()> {
        for row in census.rows() {
            self.writer.write_record(&[
                row.tick.to_string(),
                row.species.label().to_string(),
                row.population.to_string(),
                row.infected.to_string(),
                optional(row.infected_pct),
                optional(row.immune_pct),
                optional(row.vaccinated_pct),
            ])?;
        }
        Ok(())
    }

    /// Flush the file.  Idempotent once it has succeeded; a failed flush is
    /// retried by the next call.
    pub fn finish(&mut self) -> StatsResult<()> {
        if self.finished {
            return Ok(());
        }
        self.writer.flush()?;
        self.finished = true;
        Ok(())
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<StatsError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: StatsResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl SimObserver for CsvCensusWriter {
    fn on_step_end(&mut self, _tick: Tick, world: &World) {
        let result = self.write_census(&Census::of(world));
        self.store_err(result);
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
