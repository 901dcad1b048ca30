//! The closed set of actor kinds.

use std::fmt;

use crate::Fragment;

/// Host or vector.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Human,
    Mosquito,
}

const HUMAN_FRAGMENTS: &[Fragment] = &[
    Fragment::AcquiredImmunity,
    Fragment::Infectable,
    Fragment::NaturalDeath,
    Fragment::MalariaDeath,
    Fragment::DeathEvent,
];

const MOSQUITO_FRAGMENTS: &[Fragment] = &[
    Fragment::Wander,
    Fragment::Feed,
    Fragment::Breed,
    Fragment::Hunger,
    Fragment::Infectable,
    Fragment::SimpleDeath,
    Fragment::DeathEvent,
];

impl Species {
    pub const ALL: [Species; 2] = [Species::Human, Species::Mosquito];

    /// The fixed, ordered behavior composition for this species.
    pub fn fragments(self) -> &'static [Fragment] {
        match self {
            Species::Human => HUMAN_FRAGMENTS,
            Species::Mosquito => MOSQUITO_FRAGMENTS,
        }
    }

    /// Short lowercase label, used in logs and CSV headers.
    pub fn label(self) -> &'static str {
        match self {
            Species::Human => "human",
            Species::Mosquito => "mosquito",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
