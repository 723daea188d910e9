//! `TypeSchedule` — per-type entity rosters with randomized activation order.

use sugar_core::{Entity, EntityKind, SimRng, Tick};

use crate::{ScheduleError, ScheduleResult};

/// The random-activation-by-type scheduler.
///
/// Entities register under their type tag.  Each tick the simulation asks
/// for an [`activation_order`][Self::activation_order]: every type group is
/// independently Fisher-Yates shuffled, and groups are concatenated in
/// first-registration order (patches register before foragers at model
/// construction, so patches activate first).  Within a group no entity is
/// favored across ticks; across groups the ordering is fixed.
///
/// The schedule also owns the simulation clock: a monotonically increasing
/// tick counter advanced once per model step via [`advance`][Self::advance].
#[derive(Default)]
pub struct TypeSchedule {
    /// One roster per entity kind, in first-registration order.
    rosters: Vec<(EntityKind, Vec<Entity>)>,
    time: Tick,
}

impl TypeSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Add `entity` to its type group, creating the group on first sight.
    ///
    /// Registering the same entity twice would activate it twice per tick;
    /// the model registers each entity exactly once at creation.
    pub fn register(&mut self, entity: Entity) {
        let kind = entity.kind();
        match self.rosters.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, roster)) => roster.push(entity),
            None => self.rosters.push((kind, vec![entity])),
        }
    }

    /// Drop a dead entity from its type group.
    pub fn remove(&mut self, entity: Entity) -> ScheduleResult<()> {
        let kind = entity.kind();
        let roster = self
            .rosters
            .iter_mut()
            .find(|(k, _)| *k == kind)
            .map(|(_, r)| r)
            .ok_or(ScheduleError::NotRegistered(entity))?;
        match roster.iter().position(|&e| e == entity) {
            // Roster order carries no meaning — it is shuffled before use.
            Some(i) => {
                roster.swap_remove(i);
                Ok(())
            }
            None => Err(ScheduleError::NotRegistered(entity)),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Number of living entities of `kind`.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.rosters
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, r)| r.len())
    }

    /// Total registered entities across all kinds.
    pub fn total(&self) -> usize {
        self.rosters.iter().map(|(_, r)| r.len()).sum()
    }

    /// Type kinds in activation (first-registration) order.
    pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.rosters.iter().map(|(k, _)| *k)
    }

    // ── Clock ─────────────────────────────────────────────────────────────

    /// The current tick.  Starts at zero; advanced once per model step.
    pub fn time(&self) -> Tick {
        self.time
    }

    /// Advance the clock by one tick.
    pub fn advance(&mut self) {
        self.time = self.time + 1;
    }

    // ── Activation ────────────────────────────────────────────────────────

    /// Produce one tick's activation sequence.
    ///
    /// Each type group is shuffled independently through the shared RNG,
    /// then groups are concatenated in registration order.  The returned
    /// list is a snapshot: entities removed mid-tick (a forager starving
    /// during its own activation) have already acted and are simply absent
    /// next tick.
    pub fn activation_order(&self, rng: &mut SimRng) -> Vec<Entity> {
        let mut order = Vec::with_capacity(self.total());
        for (_, roster) in &self.rosters {
            let start = order.len();
            order.extend_from_slice(roster);
            rng.shuffle(&mut order[start..]);
        }
        order
    }
}
