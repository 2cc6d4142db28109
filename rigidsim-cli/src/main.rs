mod object_arg;

use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};
use object_arg::ObjectArg;
use rigidsim_core::{Bounds, ForceConfig, Shape, Vector2D, World, WorldConfig};

#[derive(Parser)]
#[command(name = "rigidsim")]
#[command(about = "Headless driver for the 2D rigid-body simulator", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scene built from --object arguments until it comes to rest
    Run {
        /// Body as TAG:ID:MASS:X,Y:VX,VY:DIMS, e.g. S:1:1:0,-50:0,0:40
        #[arg(long = "object", required = true)]
        objects: Vec<ObjectArg>,

        #[command(flatten)]
        world: WorldArgs,

        #[command(flatten)]
        run: RunArgs,
    },
    /// Drop a 40x40 square from (0, -50) and watch it settle
    Drop {
        #[command(flatten)]
        world: WorldArgs,

        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Args)]
struct WorldArgs {
    /// Gravitational acceleration, downward positive
    #[arg(long, default_value_t = rigidsim_core::config::DEFAULT_GRAVITY)]
    gravity: f64,

    /// Static and kinetic friction as MU_S,MU_K
    #[arg(long, value_parser = parse_friction)]
    friction: Option<(f64, f64)>,

    #[arg(long, default_value_t = rigidsim_core::config::DEFAULT_WIDTH)]
    width: f64,

    #[arg(long, default_value_t = rigidsim_core::config::DEFAULT_HEIGHT)]
    height: f64,
}

#[derive(Args)]
struct RunArgs {
    /// Seconds per frame
    #[arg(long, default_value_t = 0.016)]
    dt: f64,

    /// Give up after this many frames
    #[arg(long, default_value_t = 10_000)]
    max_steps: u64,

    /// Print snapshots every N frames
    #[arg(long, default_value_t = 60)]
    every: u64,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            objects,
            world,
            run,
        } => run_scene(&objects, &world, &run),
        Commands::Drop { world, run } => {
            let square = ObjectArg {
                id: 1,
                mass: 1.0,
                pos: Vector2D::new(0.0, -50.0),
                vel: Vector2D::ZERO,
                shape: Shape::Square { side: 40.0 },
            };
            run_scene(&[square], &world, &run)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = simple_logger::SimpleLogger::new().with_level(level).init() {
        eprintln!("logger already initialised: {}", e);
    }
}

fn build_world(
    objects: &[ObjectArg],
    args: &WorldArgs,
) -> Result<World, Box<dyn std::error::Error>> {
    let config = WorldConfig {
        bounds: Bounds::new(args.width, args.height),
        ..WorldConfig::default()
    };
    let mut world = World::with_config(config)?;

    world.configure_forces(ForceConfig::Gravity { g: args.gravity })?;
    if let Some((static_mu, kinetic_mu)) = args.friction {
        world.configure_forces(ForceConfig::Friction {
            static_mu,
            kinetic_mu,
        })?;
    }

    for object in objects {
        object.insert_into(&mut world)?;
    }
    Ok(world)
}

fn run_scene(
    objects: &[ObjectArg],
    world_args: &WorldArgs,
    run: &RunArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut world = build_world(objects, world_args)?;
    let every = run.every.max(1);

    for frame in 1..=run.max_steps {
        let at_rest = world.advance(run.dt)?;
        if frame % every == 0 || at_rest {
            print_frame(&world, frame);
        }
        if at_rest {
            println!("at rest after {} frames ({:.3} s)", frame, world.elapsed());
            return Ok(());
        }
    }

    info!("stopped after {} frames without coming to rest", run.max_steps);
    println!("still moving after {} frames", run.max_steps);
    Ok(())
}

fn print_frame(world: &World, frame: u64) {
    println!("frame {} (t = {:.3} s)", frame, world.elapsed());
    for s in world.snapshots() {
        println!(
            "  #{} pos=({:.3}, {:.3}) vel=({:.3}, {:.3}) acc=({:.3}, {:.3})",
            s.id, s.pos_x, s.pos_y, s.vel_x, s.vel_y, s.acc_x, s.acc_y
        );
    }
}

fn parse_friction(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("friction must be MU_S,MU_K, got '{}'", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad friction coefficient '{}': {}", v, e))
    };
    Ok((parse(a)?, parse(b)?))
}
