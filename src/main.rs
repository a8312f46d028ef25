// dsa-lab: step-through visualizer for data-structure and algorithm lessons

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dsa_lab::config::LabConfig;
use dsa_lab::engine::Simulation;
use dsa_lab::lab::{open_lab, LabKind, LabRequest};
use dsa_lab::ui::App;

/// Environment variable holding an `EnvFilter` directive
const LOG_ENV: &str = "DSA_LAB_LOG";

/// Safety net for headless runs
const MAX_HEADLESS_STEPS: usize = 100_000;

/// Step through classic algorithms and data structures one state at a time.
#[derive(Parser)]
#[command(name = "dsa-lab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Which lab to open.
    #[arg(value_enum)]
    lab: LabKind,

    /// Array values ("5,3,8"), an expression, tree node labels ("A,B,C"),
    /// or for queue/stack labs a `;`-separated command script.
    #[arg(short, long)]
    input: Option<String>,

    /// Search target: a number, or a node label for bfs/dls.
    #[arg(short, long)]
    target: Option<String>,

    /// Tree edges as parent-child index pairs ("0-1,0-2").
    #[arg(long)]
    edges: Option<String>,

    /// Depth limit for dls.
    #[arg(long)]
    depth_limit: Option<usize>,

    /// Size of a generated array, or the exact count expected from --input.
    #[arg(short, long)]
    size: Option<usize>,

    /// Seed for generated arrays.
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (defaults to ./dsa-lab.toml when present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run headless to completion and print the step log.
    #[arg(long)]
    trace: bool,
}

impl Cli {
    fn request(&self) -> LabRequest {
        // Command scripts are replayed after opening, not used as input
        let input = if self.lab.is_interactive() {
            None
        } else {
            self.input.clone()
        };
        LabRequest {
            input,
            target: self.target.clone(),
            edges: self.edges.clone(),
            depth_limit: self.depth_limit,
            size: self.size,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = LabConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_logging(&config, cli.trace)?;

    let request = cli.request();
    let sim = open_lab(cli.lab, &config, &request, !cli.trace)
        .with_context(|| format!("opening the {} lab", cli.lab))?;

    if cli.trace {
        run_headless(sim, cli.input.as_deref())
    } else {
        run_tui(App::new(sim, cli.lab, request, config))
    }
}

/// Headless mode logs to stderr; the TUI logs to the configured file or
/// nowhere, since anything on stderr would corrupt the alternate screen.
fn init_logging(config: &LabConfig, headless: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log.filter));

    if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else if let Some(path) = &config.log.file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn run_headless(mut sim: Box<dyn Simulation>, script: Option<&str>) -> Result<()> {
    if sim.is_interactive() {
        for command in script.unwrap_or_default().split(';') {
            let command = command.trim();
            if command.is_empty() {
                continue;
            }
            if let Err(e) = sim.command(command) {
                warn!(command, error = %e, "command rejected");
                eprintln!("{}: {}", command, e);
            }
        }
    } else {
        let mut taken = 0;
        while !sim.is_terminal() && taken < MAX_HEADLESS_STEPS {
            sim.step()
                .with_context(|| format!("step {} of {}", taken + 1, sim.name()))?;
            taken += 1;
        }
        info!(simulation = sim.name(), steps = taken, "headless run finished");
    }

    println!("{}", sim.export_log());
    for (key, value) in &sim.view().notes {
        println!("{}: {}", key, value);
    }
    Ok(())
}

fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("running the terminal UI")
}
