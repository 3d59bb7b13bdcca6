//! Static universe data.
//!
//! Contains factions and warzones, solar-system records, and the immutable
//! index that ties the stargate graph to warzone membership.

pub mod faction;
pub mod index;
pub mod system;

pub use faction::{Faction, UnknownFaction, Warzone, ALL_FACTIONS, ALL_WARZONES};
pub use index::{UniverseError, UniverseFile, UniverseIndex, WarzoneMembership};
pub use system::{RegionId, SecurityClass, SolarSystem, SystemId};
