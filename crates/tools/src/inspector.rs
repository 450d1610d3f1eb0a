use lifegrid_common::Pos;
use lifegrid_kernel::World;
use serde::Serialize;

/// World inspector for developer tooling.
///
/// Provides read-only queries against the world for debugging and CLI output.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world state.
    pub fn summary(world: &World) -> WorldSummary {
        let bounds = world.bounding_box();
        WorldSummary {
            generation: world.generation(),
            seed: world.seed(),
            live_cells: world.count(),
            min_corner: bounds.map(|(min, _)| min),
            max_corner: bounds.map(|(_, max)| max),
        }
    }

    /// Live cells sorted row by row, top to bottom.
    pub fn list_cells(world: &World) -> Vec<Pos> {
        let mut cells: Vec<Pos> = world.cells().collect();
        cells.sort_by_key(|p| (p.y, p.x));
        cells
    }
}

/// Summary of world state for the inspector.
///
/// Corners are `None` for an empty world rather than the `(0, 0)` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldSummary {
    pub generation: u64,
    pub seed: u64,
    pub live_cells: usize,
    pub min_corner: Option<Pos>,
    pub max_corner: Option<Pos>,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: generation={} seed={} live={}",
            self.generation, self.seed, self.live_cells
        )?;
        if let (Some(min), Some(max)) = (self.min_corner, self.max_corner) {
            write!(f, " bounds={min}..{max}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_empty_world() {
        let world = World::new();
        let summary = WorldInspector::summary(&world);
        assert_eq!(summary.generation, 0);
        assert_eq!(summary.live_cells, 0);
        assert_eq!(summary.min_corner, None);
    }

    #[test]
    fn summary_with_cells() {
        let mut world = World::with_seed(5);
        for x in -1..=1 {
            world.set_cell(Pos::new(x, 3));
        }
        world.update();

        let summary = WorldInspector::summary(&world);
        assert_eq!(summary.generation, 1);
        assert_eq!(summary.seed, 5);
        assert_eq!(summary.live_cells, 3);
        assert_eq!(summary.min_corner, Some(Pos::new(0, 2)));
        assert_eq!(summary.max_corner, Some(Pos::new(0, 4)));
    }

    #[test]
    fn list_cells_is_row_major() {
        let mut world = World::new();
        world.set_cell(Pos::new(5, 0));
        world.set_cell(Pos::new(-2, 1));
        world.set_cell(Pos::new(0, 0));
        assert_eq!(
            WorldInspector::list_cells(&world),
            vec![Pos::new(0, 0), Pos::new(5, 0), Pos::new(-2, 1)]
        );
    }

    #[test]
    fn summary_display() {
        let mut world = World::new();
        world.set_cell(Pos::new(2, -3));
        let s = format!("{}", WorldInspector::summary(&world));
        assert!(s.contains("generation=0"));
        assert!(s.contains("bounds=(2, -3)..(2, -3)"));
    }

    #[test]
    fn summary_serializes_to_json() {
        let world = World::new();
        let json = serde_json::to_value(WorldInspector::summary(&world)).unwrap();
        assert_eq!(json["live_cells"], 0);
        assert!(json["min_corner"].is_null());
    }
}
