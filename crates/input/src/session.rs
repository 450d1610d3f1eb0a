use lifegrid_common::{LifeConfig, Pos, Viewport};
use lifegrid_kernel::{StepReport, World, WorldError};

use crate::command::Command;

/// Errors from applying a command.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("world error: {0}")]
    World(#[from] WorldError),
}

/// What the front end should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The viewport or the whole world changed; draw again.
    Redraw,
    /// One or more generations ran; carries the report of the last one.
    Stepped(StepReport),
    Quit,
    Ignored,
}

/// Single owner of a world and the viewport used to look at it.
///
/// All access to the world goes through `&mut self`, which is how the
/// front end serializes mutation and rendering.
#[derive(Debug, Clone)]
pub struct Session {
    world: World,
    viewport: Viewport,
    config: LifeConfig,
}

impl Session {
    /// An empty world with the viewport over the starting rectangle.
    pub fn new(config: LifeConfig) -> Self {
        Self::with_world(World::with_seed(config.seed), config)
    }

    pub fn with_world(world: World, config: LifeConfig) -> Self {
        let viewport = Viewport::from_size(Pos::ORIGIN, config.width, config.height);
        Self {
            world,
            viewport,
            config,
        }
    }

    /// A session whose starting rectangle is already randomly seeded.
    pub fn seeded(config: LifeConfig) -> Result<Self, SessionError> {
        let mut session = Self::new(config);
        session.reseed()?;
        Ok(session)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Apply one command.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, SessionError> {
        tracing::debug!(?command, "applying command");
        let outcome = match command {
            Command::Step => Outcome::Stepped(self.world.update()),
            Command::Run(n) => Outcome::Stepped(self.run(n, |_, _| {})),
            Command::Pan(direction) => {
                if self.viewport.pan_toward(direction) {
                    Outcome::Redraw
                } else {
                    Outcome::Ignored
                }
            }
            Command::Randomize => {
                self.reseed()?;
                Outcome::Redraw
            }
            Command::Quit => Outcome::Quit,
            Command::Noop => Outcome::Ignored,
        };
        Ok(outcome)
    }

    /// Run `generations` updates, calling `on_frame` after each one.
    /// Returns the last report, or a zero report if nothing ran.
    pub fn run(
        &mut self,
        generations: u32,
        mut on_frame: impl FnMut(&Self, &StepReport),
    ) -> StepReport {
        let mut last = StepReport {
            generation: self.world.generation(),
            live: self.world.count(),
            ..StepReport::default()
        };
        for _ in 0..generations {
            last = self.world.update();
            on_frame(&*self, &last);
        }
        last
    }

    fn reseed(&mut self) -> Result<(), SessionError> {
        let count = self.config.initial_count();
        self.world
            .randomize(count, self.config.width, self.config.height)?;
        tracing::info!(
            count,
            width = self.config.width,
            height = self.config.height,
            "seeded starting rectangle"
        );
        Ok(())
    }
}
