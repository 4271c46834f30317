//! H2 + Cl2 → 2 HCl Kinetics Simulation
//!
//! Headless host for the reaction simulation: plays the role of the display
//! loop, the sliders and the hidden instructor keys.

mod ui;

use clap::Parser;
use crossbeam_channel::{unbounded, Receiver};
use reaction_simulation::{ReactionSimulation, RenderSnapshot, SimulationParams, MAX_REACTANTS};
use std::io::BufRead;
use std::thread;
use std::time::{Duration, Instant};
use ui::{diagnostic_lines, UiState};

#[derive(Parser, Debug)]
#[command(version, about = "H2 + Cl2 -> 2 HCl particle kinetics simulation")]
struct Args {
    /// Temperature in °C
    #[arg(short, long, default_value_t = 50.0, allow_negative_numbers = true)]
    temperature: f32,

    /// Initial H2 molecules
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(0..i64::from(MAX_REACTANTS)))]
    h2: u32,

    /// Initial Cl2 molecules (raised above the H2 count if needed)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_REACTANTS)))]
    cl2: u32,

    /// Frames to simulate
    #[arg(short = 'n', long, default_value_t = 600)]
    ticks: u64,

    /// Frame cadence; 0 runs unthrottled
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Start with trap mode on
    #[arg(long, action)]
    trap: bool,

    /// Start with the diagnostic overlay visible
    #[arg(long, action)]
    diag: bool,

    /// Press restart every N frames (0 = never)
    #[arg(long, default_value_t = 0)]
    restart_every: u64,

    /// Frames between two diagnostic reports
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Box width in pixels
    #[arg(long, default_value_t = 640.0)]
    width: f32,

    /// Box height in pixels
    #[arg(long, default_value_t = 400.0)]
    height: f32,

    /// Read keys from stdin while running: p, t, r (restart), + and - (temperature)
    #[arg(short, long, action)]
    interactive: bool,
}

/// Temperature change per +/- key press
const TEMPERATURE_STEP: f32 = 5.0;

/// Forward every typed character to the frame loop
fn spawn_key_reader() -> Receiver<char> {
    let (sender, receiver) = unbounded();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            for key in line.chars().filter(|c| !c.is_whitespace()) {
                if sender.send(key).is_err() {
                    return;
                }
            }
        }
    });
    receiver
}

struct App {
    simulation: ReactionSimulation,
    ui: UiState,
    frame_interval: Option<Duration>,
    keys: Option<Receiver<char>>,
}

impl App {
    fn new(args: &Args) -> Self {
        let params = SimulationParams::default().with_bounds(args.width, args.height);

        let mut ui = UiState {
            show_diagnostics: args.diag,
            trap_mode: args.trap,
            ..Default::default()
        };
        ui.set_temperature(args.temperature, &params.kinetics);
        ui.set_h2_count(args.h2);
        ui.set_cl2_count(args.cl2);

        let simulation = match args.seed {
            Some(seed) => ReactionSimulation::with_seed(params, ui.h2_count, ui.cl2_count, seed),
            None => ReactionSimulation::new(params, ui.h2_count, ui.cl2_count),
        };

        let frame_interval = (args.fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(args.fps)));

        Self {
            simulation,
            ui,
            frame_interval,
            keys: args.interactive.then(spawn_key_reader),
        }
    }

    fn restart(&mut self) {
        self.simulation.restart(self.ui.h2_count, self.ui.cl2_count);
    }

    fn handle_key(&mut self, key: char) {
        let kinetics = self.simulation.params().kinetics;
        match key {
            'r' | 'R' => {
                log::info!("Restart");
                self.restart();
            }
            '+' => self.ui.set_temperature(self.ui.temperature_c + TEMPERATURE_STEP, &kinetics),
            '-' => self.ui.set_temperature(self.ui.temperature_c - TEMPERATURE_STEP, &kinetics),
            _ => {
                if !self.ui.handle_key(key) {
                    log::debug!("Unbound key {:?}", key);
                    return;
                }
            }
        }
        log::info!(
            "T = {:.0} °C, trap mode {}, diagnostics {}",
            self.ui.temperature_c,
            on_off(self.ui.trap_mode),
            on_off(self.ui.show_diagnostics)
        );
    }

    fn poll_keys(&mut self) {
        let pressed: Vec<char> = match &self.keys {
            Some(keys) => keys.try_iter().collect(),
            None => return,
        };
        for key in pressed {
            self.handle_key(key);
        }
    }

    fn frame(&mut self) -> RenderSnapshot {
        self.simulation.tick(self.ui.temperature_c, self.ui.trap_mode)
    }

    fn report(&self) {
        let state = self.simulation.state();
        for line in diagnostic_lines(
            &self.ui,
            state.initial_counts(),
            state.counts(),
            state.reaction_count(),
        ) {
            log::info!("{}", line);
        }
    }

    fn run(&mut self, ticks: u64, restart_every: u64, report_every: u64) {
        let report_every = report_every.max(1);
        let started = Instant::now();

        for frame in 1..=ticks {
            let frame_start = Instant::now();
            self.poll_keys();

            if restart_every > 0 && frame % restart_every == 0 {
                log::info!("Restart at frame {}", frame);
                self.restart();
            }

            let snapshot = self.frame();
            log::trace!(
                "frame {}: {} molecules, {} bytes of instance data",
                frame,
                snapshot.instances.len(),
                snapshot.as_bytes().len()
            );

            if self.ui.show_diagnostics && frame % report_every == 0 {
                log::info!(
                    "frame {}: speed {:.2}, p {:.5}",
                    frame,
                    snapshot.kinetics.speed,
                    snapshot.kinetics.reaction_probability
                );
                self.report();
            }

            if let Some(interval) = self.frame_interval {
                if let Some(remaining) = interval.checked_sub(frame_start.elapsed()) {
                    thread::sleep(remaining);
                }
            }
        }

        let counts = self.simulation.counts();
        log::info!(
            "Finished {} frames in {:.2?}: {} H2, {} Cl2, {} HCl, {} reaction events",
            ticks,
            started.elapsed(),
            counts.reactant_a,
            counts.reactant_b,
            counts.products,
            self.simulation.state().reaction_count()
        );
    }
}

fn main() {
    // Initialize logger (RUST_LOG=debug for per-reaction output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting H2 + Cl2 kinetics simulation...");

    let mut app = App::new(&args);
    log::info!(
        "T = {:.0} °C, {} H2, {} Cl2, trap mode {}",
        app.ui.temperature_c,
        app.ui.h2_count,
        app.ui.cl2_count,
        on_off(app.ui.trap_mode)
    );

    app.run(args.ticks, args.restart_every, args.report_every);
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
