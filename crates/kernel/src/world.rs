use lifegrid_common::Pos;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::rules::{NEIGHBOR_OFFSETS, next_state};

/// Errors from world operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("cannot place {count} distinct cells in a {width}x{height} rectangle")]
    InvalidArgument { count: usize, width: u32, height: u32 },
}

/// Statistics for one call to [`World::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Generation number after the step.
    pub generation: u64,
    /// Size of the candidate set (live cells plus their neighbours).
    pub candidates: usize,
    /// Number of rule evaluations performed.
    pub evaluated: usize,
    pub births: usize,
    pub deaths: usize,
    /// Live cells after the step.
    pub live: usize,
}

/// A sparse Game of Life world on the unbounded integer plane.
///
/// Only live coordinates are stored. Every coordinate not in the set is dead,
/// so queries are defined everywhere and cost one hash lookup.
///
/// Random seeding draws from a `ChaCha8Rng` owned by the world: two worlds
/// built with the same seed and fed the same operations end up identical.
#[derive(Debug, Clone)]
pub struct World {
    live: HashSet<Pos>,
    generation: u64,
    seed: u64,
    rng: ChaCha8Rng,
}

impl Default for World {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl World {
    /// Create an empty world with seed 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty world whose random seeding is driven by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            live: HashSet::new(),
            generation: 0,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Number of completed generations since creation or the last reseed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of live cells.
    pub fn count(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Iterate live cells in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.live.iter().copied()
    }

    /// Whether `pos` is alive. Untouched coordinates are dead.
    pub fn is_alive(&self, pos: Pos) -> bool {
        self.live.contains(&pos)
    }

    /// Mark `pos` alive. Returns true if it was dead before.
    pub fn set_cell(&mut self, pos: Pos) -> bool {
        self.live.insert(pos)
    }

    /// Replace the live set with `count` distinct cells drawn uniformly from
    /// `[0, width) x [0, height)`, and reset the generation counter.
    ///
    /// Fails without touching the world if the rectangle has fewer than
    /// `count` cells.
    pub fn randomize(&mut self, count: usize, width: u32, height: u32) -> Result<(), WorldError> {
        let invalid = || WorldError::InvalidArgument {
            count,
            width,
            height,
        };
        let capacity = u64::from(width) * u64::from(height);
        let length = usize::try_from(capacity).map_err(|_| invalid())?;
        if count > length {
            return Err(invalid());
        }

        let w = u64::from(width);
        let live: HashSet<Pos> = rand::seq::index::sample(&mut self.rng, length, count)
            .into_iter()
            .map(|i| {
                let i = i as u64;
                Pos::new((i % w) as i64, (i / w) as i64)
            })
            .collect();

        tracing::debug!(count, width, height, "randomized world");
        self.live = live;
        self.generation = 0;
        Ok(())
    }

    /// Smallest corner of the bounding box, or `(0, 0)` for an empty world.
    ///
    /// Each axis is reduced independently, so the result need not be a live cell.
    pub fn min_corner(&self) -> Pos {
        self.bounding_box().map_or(Pos::ORIGIN, |(min, _)| min)
    }

    /// Largest corner of the bounding box, or `(0, 0)` for an empty world.
    pub fn max_corner(&self) -> Pos {
        self.bounding_box().map_or(Pos::ORIGIN, |(_, max)| max)
    }

    /// `(min_corner, max_corner)`, or `None` if nothing is alive.
    pub fn bounding_box(&self) -> Option<(Pos, Pos)> {
        let mut cells = self.live.iter();
        let first = *cells.next()?;
        Some(cells.fold((first, first), |(min, max), p| {
            (
                Pos::new(min.x.min(p.x), min.y.min(p.y)),
                Pos::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    /// The Moore neighbours of `pos`.
    ///
    /// Neighbours outside the `i64` plane do not exist and are skipped.
    pub fn neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| pos.offset(dx, dy))
    }

    /// Number of live neighbours of `pos`, in `0..=8`.
    pub fn neighbor_count(&self, pos: Pos) -> u8 {
        Self::neighbors(pos).filter(|p| self.live.contains(p)).count() as u8
    }

    /// Every cell whose state can change next generation: the live cells and
    /// all of their neighbours, each exactly once.
    pub fn candidates(&self) -> HashSet<Pos> {
        let mut candidates = HashSet::with_capacity(self.live.len() * 9);
        for &pos in &self.live {
            candidates.insert(pos);
            candidates.extend(Self::neighbors(pos));
        }
        candidates
    }

    /// Advance one generation.
    ///
    /// All next states are computed from the current live set before it is
    /// replaced, so no evaluation observes a partially updated generation.
    /// An empty world stays empty and its generation counter does not move.
    pub fn update(&mut self) -> StepReport {
        if self.live.is_empty() {
            return StepReport {
                generation: self.generation,
                ..StepReport::default()
            };
        }

        let _span = tracing::info_span!("world_update", generation = self.generation).entered();

        let candidates = self.candidates();
        let mut evaluated = 0;
        let mut births = 0;
        let next: HashSet<Pos> = candidates
            .iter()
            .copied()
            .filter(|&pos| {
                evaluated += 1;
                let alive = self.live.contains(&pos);
                let lives = next_state(alive, self.neighbor_count(pos));
                if lives && !alive {
                    births += 1;
                }
                lives
            })
            .collect();

        let survivors = next.len() - births;
        let report = StepReport {
            generation: self.generation + 1,
            candidates: candidates.len(),
            evaluated,
            births,
            deaths: self.live.len() - survivors,
            live: next.len(),
        };

        self.live = next;
        self.generation += 1;

        tracing::trace!(
            generation = report.generation,
            candidates = report.candidates,
            births = report.births,
            deaths = report.deaths,
            live = report.live,
            "world update complete"
        );

        report
    }
}
