//! `StatsCollector` — a per-step census time series.

use std::path::{Path, PathBuf};

use tracing::debug;

use mal_actor::Species;
use mal_core::Tick;
use mal_sim::{SimObserver, World};

use crate::{Census, CsvCensusWriter, Stat, StatsResult};

/// A [`SimObserver`] that takes one [`Census`] at the end of every step.
///
/// ```rust
/// use mal_actor::Species;
/// use mal_core::{SimConfig, SimRng};
/// use mal_sim::SimBuilder;
/// use mal_stats::{Stat, StatsCollector};
///
/// let mut config = SimConfig::default();
/// config.grid.width = 10;
/// config.grid.height = 10;
/// config.mosquito.count = 30;
///
/// let mut sim = SimBuilder::new(config, SimRng::new(1)).build()?;
/// let mut stats = StatsCollector::new();
/// sim.run_steps(5, &mut stats)?;
/// assert_eq!(stats.series(Stat::Population, Species::Mosquito).len(), 5);
/// # Ok::<(), mal_sim::SimError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct StatsCollector {
    history: Vec<Census>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a census now, outside the step loop (e.g. right after build).
    pub fn sample(&mut self, world: &World) -> &Census {
        self.history.push(Census::of(world));
        &self.history[self.history.len() - 1]
    }

    /// Every census taken so far, oldest first.
    pub fn history(&self) -> &[Census] {
        &self.history
    }

    pub fn latest(&self) -> Option<&Census> {
        self.history.last()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The time series of one stat for one species.
    pub fn series(&self, stat: Stat, species: Species) -> Vec<Option<f64>> {
        self.history.iter().map(|c| c.get(stat, species)).collect()
    }

    /// Ticks the series are sampled at.
    pub fn ticks(&self) -> Vec<Tick> {
        self.history.iter().map(|c| c.tick).collect()
    }

    /// Write the whole history to `dir/census.csv`.
    pub fn dump(&self, dir: &Path) -> StatsResult<PathBuf> {
        let mut writer = CsvCensusWriter::new(dir)?;
        for census in &self.history {
            writer.write_census(census)?;
        }
        writer.finish()?;
        debug!(rows = self.history.len(), path = %writer.path().display(), "census written");
        Ok(writer.path().to_path_buf())
    }
}

impl SimObserver for StatsCollector {
    fn on_step_end(&mut self, _tick: Tick, world: &World) {
        self.history.push(Census::of(world));
    }
}
