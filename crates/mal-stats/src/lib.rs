//! `mal-stats` — population aggregates for the malaria simulation.
//!
//! Everything here is read-only with respect to the simulation: statistics
//! are computed fresh from the registry whenever they are asked for.
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`census`]      | `Census`, `SpeciesCensus`, `Stat`, `CensusRow`            |
//! | [`collector`]   | `StatsCollector` — per-step time series (`SimObserver`)   |
//! | [`csv`]         | `CsvCensusWriter` — `census.csv` output (`SimObserver`)   |
//! | [`error`]       | `StatsError`, `StatsResult<T>`                            |
//!
//! # Usage
//!
//! ```rust,ignore
//! use mal_stats::{Stat, StatsCollector};
//!
//! let mut stats = StatsCollector::new();
//! sim.run_steps(1_000, &mut stats)?;
//! let infected = stats.series(Stat::InfectedPct, Species::Human);
//! stats.dump(Path::new("./output"))?;
//! ```

pub mod census;
pub mod collector;
pub mod csv;
pub mod error;


pub use census::{Census, CensusRow, SpeciesCensus, Stat};
pub use collector::StatsCollector;
pub use self::csv::{CENSUS_FILE, CsvCensusWriter};
pub use error::{StatsError, StatsResult};
