//! The actor entity: shared state slices plus species-specific traits.
//!
//! An actor's position is *not* stored here.  It lives in the grid's
//! reverse index, so there is exactly one source of truth for where an
//! actor stands.

use mal_core::ActorId;

use crate::{Infection, Species};

/// Age and the terminal death flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    /// Steps survived.  Only natural death advances it.
    pub age:     u64,
    /// Set by a death fragment in `on_step_begin`.  Terminal.
    pub dead:    bool,
    /// Set when the death event has fired, so it fires once.
    pub mourned: bool,
}

/// Species-specific state.  The variant *is* the species tag.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traits {
    Host,
    Vector {
        /// Grows by one per step; negative means satiated.
        hunger:          f64,
        born_vaccinated: bool,
    },
}

/// A live human or mosquito.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    id:            ActorId,
    pub infection: Infection,
    pub vitals:    Vitals,
    pub traits:    Traits,
}

impl Actor {
    pub fn human(id: ActorId, use_net: bool) -> Self {
        Self {
            id,
            infection: Infection { use_net, ..Infection::default() },
            vitals:    Vitals::default(),
            traits:    Traits::Host,
        }
    }

    /// A freshly hatched mosquito starts with `hunger` (normally
    /// `fed_hunger`).
    pub fn mosquito(id: ActorId, hunger: f64, vaccinated: bool) -> Self {
        Self {
            id,
            infection: Infection { vaccinated, ..Infection::default() },
            vitals:    Vitals::default(),
            traits:    Traits::Vector { hunger, born_vaccinated: vaccinated },
        }
    }

    #[inline]
    pub fn id(&self) -> ActorId {
        self.id
    }

    #[inline]
    pub fn species(&self) -> Species {
        match self.traits {
            Traits::Host => Species::Human,
            Traits::Vector { .. } => Species::Mosquito,
        }
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        matches!(self.traits, Traits::Host)
    }

    #[inline]
    pub fn is_mosquito(&self) -> bool {
        matches!(self.traits, Traits::Vector { .. })
    }

    /// Current hunger; `None` for humans.
    pub fn hunger(&self) -> Option<f64> {
        match self.traits {
            Traits::Host => None,
            Traits::Vector { hunger, .. } => Some(hunger),
        }
    }

    /// Mutable hunger; `None` for humans.
    pub fn hunger_mut(&mut self) -> Option<&mut f64> {
        match &mut self.traits {
            Traits::Host => None,
            Traits::Vector { hunger, .. } => Some(hunger),
        }
    }

    /// Whether the mosquito carried the vaccine from birth.  `false` for
    /// humans.
    pub fn born_vaccinated(&self) -> bool {
        matches!(self.traits, Traits::Vector { born_vaccinated: true, .. })
    }
}
