use clap::{Parser, ValueEnum};
use light_clock::*;

mod visual;

/// Light-clock demonstrations.
#[derive(Debug, Parser)]
#[command(name = "light_clock_demos")]
struct Cli {
    /// Which arrangement of clocks to show.
    #[arg(long, value_enum, default_value_t = SceneKind::Pair)]
    scene: SceneKind,

    /// Speed of the moving clock as a fraction of the light speed.
    #[arg(long, default_value_t = 0.6)]
    beta: f64,

    /// Frames to simulate in text mode.
    #[arg(long, default_value_t = 240)]
    frames: u32,

    /// Open a window instead of printing frames.
    #[arg(long)]
    visual: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// One clock at rest.
    Stationary,
    /// One clock moving to the right.
    Moving,
    /// A clock at rest next to a moving one.
    Pair,
}

const LIGHT_SPEED: f64 = 1.0;
const FRAME_DT: f64 = 1.0 / 60.0;
// Ten seconds of photon path at 60 fps.
const TRACE_SAMPLES: usize = 600;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    log::info!("Running scene: {:?} (beta = {})", cli.scene, cli.beta);

    if cli.visual {
        if let Err(e) = visual::run_visual(cli.scene, cli.beta) {
            log::error!("Error running visual demo: {}", e);
        }
        return;
    }

    if let Err(e) = run_text(cli.scene, cli.beta, cli.frames) {
        log::error!("Error running demo: {}", e);
    }
}

fn run_text(kind: SceneKind, beta: f64, frames: u32) -> Result<()> {
    let mut scene = build_scene(kind, beta, 1.0)?;
    log::info!("Simulating {} clocks for {} frames", scene.clocks.len(), frames);

    for frame in 0..frames {
        let should_log = frame % 30 == 0;
        scene.step(FRAME_DT, should_log)?;
        if should_log {
            for (idx, clock) in scene.snapshot().iter().enumerate() {
                println!(
                    "Frame {:4} clock {}: proper={:.3} photon=({:.2}, {:.2}) ticks={} path={:.3}",
                    frame,
                    idx,
                    clock.indicator_value,
                    clock.marker.x,
                    clock.marker.y,
                    clock.phase.cycles / 2,
                    clock.trace_distance
                );
            }
        }
    }
    println!("Simulation finished at t = {:.3}", scene.time());
    Ok(())
}

/// Builds the clocks for `kind`. `unit` scales lengths (1.0 for text mode,
/// pixels per unit in the window).
pub fn build_scene(kind: SceneKind, beta: f64, unit: f64) -> Result<Scene> {
    let mut scene = Scene::with_trace_limit(TRACE_SAMPLES);
    let light_speed = LIGHT_SPEED * unit;
    let height = 2.0 * unit;
    let anchor = IndicatorAnchor::new(-Vec3::UP, 0.4 * unit);

    let add = |scene: &mut Scene, x: f64, velocity: f64, style: ClockStyle| -> Result<usize> {
        let config = ClockConfig::from_light_speed(Vec3::xy(x, 0.0), Vec3::xy(x, height), light_speed)?
            .with_style(style);
        let frame = InertialFrame::new(Vec3::xy(velocity * light_speed, 0.0), light_speed)?;
        scene.add_clock(LightClock::from_config(config)?, frame, anchor)
    };

    match kind {
        SceneKind::Stationary => {
            add(&mut scene, 0.0, 0.0, ClockStyle::default().with_label("rest"))?;
        }
        SceneKind::Moving => {
            add(&mut scene, 0.0, beta, ClockStyle::new(ClockStyle::BLUE, None).with_label("moving"))?;
        }
        SceneKind::Pair => {
            add(&mut scene, 0.0, 0.0, ClockStyle::default().with_label("rest"))?;
            add(&mut scene, 1.5 * unit, beta, ClockStyle::new(ClockStyle::BLUE, None).with_label("moving"))?;
        }
    }
    Ok(scene)
}
