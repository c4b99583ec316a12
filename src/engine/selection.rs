//! Weighted candidate selection.
//!
//! Keeps each participant's remaining quota for one attempt and draws the
//! next participant on duty, favouring larger quotas and avoiding whoever
//! was on duty the calendar day before.

use tracing::trace;

use crate::models::{Participant, TargetDistribution};

use super::RandomSource;

#[derive(Debug, Clone)]
struct QuotaRecord<'a> {
    participant: &'a Participant,
    remaining: u32,
}

/// Remaining quotas for one attempt, sorted by `remaining` descending.
#[derive(Debug, Clone)]
pub(crate) struct WorkingSet<'a> {
    records: Vec<QuotaRecord<'a>>,
}

impl<'a> WorkingSet<'a> {
    pub(crate) fn new(roster: &'a [Participant], targets: &TargetDistribution) -> Self {
        let mut set = Self {
            records: roster
                .iter()
                .map(|participant| QuotaRecord {
                    participant,
                    remaining: targets.get(&participant.id),
                })
                .collect(),
        };
        set.sort();
        set
    }

    /// Picks the next participant and charges one unit of their quota.
    ///
    /// `previous` is the participant on duty the calendar day before, if any.
    pub(crate) fn select<R: RandomSource + ?Sized>(
        &mut self,
        previous: Option<&str>,
        rng: &mut R,
    ) -> &'a Participant {
        let index = self.pick(previous, rng);
        let record = &mut self.records[index];
        record.remaining = record.remaining.saturating_sub(1);
        let chosen = record.participant;
        self.sort();
        chosen
    }

    fn pick<R: RandomSource + ?Sized>(&self, previous: Option<&str>, rng: &mut R) -> usize {
        let strict: Vec<usize> = self
            .indices_where(|r| r.remaining > 0 && Some(r.participant.id.as_str()) != previous);
        if !strict.is_empty() {
            return strict[weighted_draw(&self.weights(&strict), rng)];
        }

        let relaxed: Vec<usize> = self.indices_where(|r| r.remaining > 0);
        if !relaxed.is_empty() {
            trace!(previous = ?previous, "no-repeat constraint relaxed");
            return relaxed[weighted_draw(&self.weights(&relaxed), rng)];
        }

        trace!("all quotas exhausted, drawing from full roster");
        rng.next_index(self.records.len())
    }

    fn indices_where(&self, keep: impl Fn(&QuotaRecord<'a>) -> bool) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| keep(*r))
            .map(|(i, _)| i)
            .collect()
    }

    fn weights(&self, indices: &[usize]) -> Vec<u32> {
        indices.iter().map(|&i| self.records[i].remaining).collect()
    }

    // Stable, so equal quotas keep their relative order.
    fn sort(&mut self) {
        self.records.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    }

    #[cfg(test)]
    fn remaining(&self, participant_id: &str) -> u32 {
        self.records
            .iter()
            .find(|r| r.participant.id == participant_id)
            .map_or(0, |r| r.remaining)
    }
}

/// Draws an index with probability proportional to its weight.
///
/// Falls back to a uniform draw when every weight is zero.
pub(crate) fn weighted_draw<R: RandomSource + ?Sized>(weights: &[u32], rng: &mut R) -> usize {
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return rng.next_index(weights.len());
    }

    let mut point = rng.next_f64() * total as f64;
    for (index, &weight) in weights.iter().enumerate() {
        let weight = f64::from(weight);
        if point < weight {
            return index;
        }
        point -= weight;
    }

    // Rounding can leave `point` at the very top of the range.
    weights.iter().rposition(|&w| w > 0).unwrap_or(0)
}
