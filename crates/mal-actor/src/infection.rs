//! The `Infectable` state slice shared by both species.

use mal_core::Tick;

/// Disease and protection state of one actor.
///
/// `infection_count` only ever grows.  It stays zero until the first
/// successful [`infect`](Self::infect).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Infection {
    pub infected:        bool,
    pub infection_count: u32,
    /// Tick of the most recent clean → infected transition.
    pub onset:           Tick,
    /// Acquired immunity.  Never reset, except by vaccination.
    pub immune:          bool,
    pub vaccinated:      bool,
    /// Bed net.  Only ever set on humans.
    pub use_net:         bool,
}

impl Infection {
    /// Infect at `now`.  Returns `false` (and changes nothing) if vaccinated.
    ///
    /// Re-infecting an already infected actor bumps the count but keeps the
    /// original onset.
    pub fn infect(&mut self, now: Tick) -> bool {
        if self.vaccinated {
            return false;
        }
        if !self.infected {
            self.onset = now;
            self.infected = true;
        }
        self.infection_count += 1;
        true
    }

    /// Vaccinate and cure: clears infection and immunity.
    pub fn vaccinate(&mut self) {
        self.vaccinated = true;
        self.infected = false;
        self.immune = false;
    }

    /// Ticks since onset, or 0 if not infected.
    pub fn infected_for(&self, now: Tick) -> u64 {
        if self.infected { now.since(self.onset) } else { 0 }
    }
}
