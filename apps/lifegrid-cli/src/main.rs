use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use lifegrid_common::{LifeConfig, Pos};
use lifegrid_input::{Command, Outcome, Session};
use lifegrid_kernel::World;
use lifegrid_render::{Renderer, TextRenderer};
use lifegrid_tools::WorldInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lifegrid-cli", about = "Conway's Game of Life on an unbounded grid")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions and the default configuration
    Info,
    /// Seed the starting rectangle at random and print each generation
    Run {
        /// Number of generations to simulate
        #[arg(short, long, default_value = "10")]
        generations: u32,
        /// Print the final summary as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        world: WorldArgs,
    },
    /// Interactive session reading one command per line from stdin
    Play {
        #[command(flatten)]
        world: WorldArgs,
    },
    /// Follow a glider from a fixed start
    Glider {
        /// Number of generations to simulate
        #[arg(short, long, default_value = "8")]
        generations: u32,
    },
}

/// World settings; flags override values read from `--config`.
#[derive(Args)]
struct WorldArgs {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Width of the starting rectangle
    #[arg(long)]
    width: Option<u32>,
    /// Height of the starting rectangle
    #[arg(long)]
    height: Option<u32>,
    /// RNG seed for the initial population
    #[arg(short, long)]
    seed: Option<u64>,
    /// Number of cells to seed instead of the configured fill ratio
    #[arg(long)]
    count: Option<usize>,
    /// Pause between animated frames, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

impl WorldArgs {
    fn resolve(&self) -> anyhow::Result<LifeConfig> {
        let mut config = match &self.config {
            Some(path) => LifeConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => LifeConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(delay) = self.delay_ms {
            config.frame_delay_ms = delay;
        }
        config.validate()?;
        Ok(config)
    }

    /// Build a session seeded either by `--count` or by the fill ratio.
    fn session(&self) -> anyhow::Result<Session> {
        let config = self.resolve()?;
        let session = match self.count {
            Some(count) => {
                let (width, height) = (config.width, config.height);
                let mut session = Session::new(config);
                session.world_mut().randomize(count, width, height)?;
                session
            }
            None => Session::seeded(config)?,
        };
        Ok(session)
    }
}

fn draw(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let renderer = TextRenderer::from_config(session.config());
    writeln!(out, "Generation {}", session.world().generation())?;
    write!(out, "{}", renderer.render(session.world(), session.viewport()))?;
    writeln!(out, "{}", WorldInspector::summary(session.world()))?;
    out.flush()
}

fn pause(session: &Session) {
    let delay = session.config().frame_delay_ms;
    if delay > 0 {
        std::thread::sleep(Duration::from_millis(delay));
    }
}

fn run(generations: u32, json: bool, args: &WorldArgs) -> anyhow::Result<()> {
    let mut session = args.session()?;
    let mut out = io::stdout().lock();

    draw(&mut out, &session)?;
    let mut failure = None;
    session.run(generations, |s, _| {
        if failure.is_none() {
            pause(s);
            failure = draw(&mut out, s).err();
        }
    });
    if let Some(e) = failure {
        return Err(e.into());
    }

    let summary = WorldInspector::summary(session.world());
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        writeln!(out, "{summary}")?;
    }
    Ok(())
}

const PLAY_HELP: &str = "commands: <enter>/step, r N, w/a/s/d, n (new), q (quit)";

fn play(args: &WorldArgs) -> anyhow::Result<()> {
    let mut session = args.session()?;
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "{PLAY_HELP}")?;
    draw(&mut out, &session)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}; {PLAY_HELP}")?;
                continue;
            }
        };

        match command {
            Command::Run(n) => {
                let mut failure = None;
                session.run(n, |s, _| {
                    if failure.is_none() {
                        pause(s);
                        failure = draw(&mut out, s).err();
                    }
                });
                if let Some(e) = failure {
                    return Err(e.into());
                }
            }
            command => match session.apply(command)? {
                Outcome::Quit => {
                    writeln!(out, "Quitting")?;
                    break;
                }
                Outcome::Ignored => {}
                Outcome::Redraw | Outcome::Stepped(_) => draw(&mut out, &session)?,
            },
        }
    }
    Ok(())
}

fn glider(generations: u32) -> anyhow::Result<()> {
    let mut world = World::new();
    for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
        world.set_cell(Pos::new(x, y));
    }
    let renderer = TextRenderer::default();

    println!("{}", WorldInspector::summary(&world));
    print!("{}", renderer.render_fit(&world));
    for _ in 0..generations {
        let report = world.update();
        tracing::debug!(?report, "glider step");
        println!("{}", WorldInspector::summary(&world));
        print!("{}", renderer.render_fit(&world));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("lifegrid-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: generation={}", World::new().generation());
            println!("render: {}", lifegrid_render::crate_info());
            println!("tools: {}", lifegrid_tools::crate_info());
            println!(
                "default config: {}",
                serde_json::to_string(&LifeConfig::default())?
            );
        }
        Commands::Run {
            generations,
            json,
            world,
        } => run(generations, json, &world)?,
        Commands::Play { world } => play(&world)?,
        Commands::Glider { generations } => glider(generations)?,
    }

    Ok(())
}
