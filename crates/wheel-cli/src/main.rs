use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wheel_app::{Controller, WheelEvent};
use wheel_core::{Status, WheelConfig, build_segments, format_percent, parse_options};
use wheel_render::{SvgSurface, WheelTheme, render_wheel};

/// Frame interval for simulated spins (~60 fps).
const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "wheel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file (tolerance, spin tuning, default options)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Validate an option list and print its status.
    Check {
        /// Option file, one `<label> <number>%` per line; `-` reads stdin.
        /// Uses the default options when omitted.
        file: Option<PathBuf>,
    },
    /// Render the wheel as SVG.
    Svg {
        file: Option<PathBuf>,

        /// Output path; prints to stdout when omitted
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Side length in pixels (capped by the config's max size)
        #[arg(long, default_value_t = 460.0)]
        size: f64,

        /// Wheel rotation in radians
        #[arg(long, default_value_t = 0.0)]
        rotation: f64,

        #[arg(long)]
        dark: bool,
    },
    /// Simulate a spin and print where it lands.
    Spin {
        file: Option<PathBuf>,

        /// Seed for a reproducible spin
        #[arg(long)]
        seed: Option<u64>,

        /// Also write the settled wheel as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { file } => check(&read_options(file.as_deref(), &config)?, &config),
        Commands::Svg {
            file,
            output,
            size,
            rotation,
            dark,
        } => {
            let size = svg_size(size, &config)?;
            let text = read_options(file.as_deref(), &config)?;
            let parsed = parse_options(&text);
            let segments = build_segments(&parsed.options, parsed.total_weight);
            let theme = if dark { WheelTheme::dark() } else { WheelTheme::light() };

            let mut svg = SvgSurface::new();
            render_wheel(&mut svg, &segments, rotation, size, &theme);
            write_output(output.as_deref(), &svg.finish())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Spin { file, seed, svg } => {
            let text = read_options(file.as_deref(), &config)?;
            spin(text, config, seed, svg.as_deref())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<WheelConfig> {
    let Some(path) = path else {
        return Ok(WheelConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    WheelConfig::from_json(&json).with_context(|| format!("Bad config {}", path.display()))
}

fn read_options(file: Option<&Path>, config: &WheelConfig) -> anyhow::Result<String> {
    match file {
        None => Ok(config.default_text()),
        Some(path) if path == Path::new("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read options from stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options {}", path.display())),
    }
}

/// `--size` capped by the config; must be a positive number of pixels.
fn svg_size(size: f64, config: &WheelConfig) -> anyhow::Result<f64> {
    if size.is_nan() || size <= 0.0 {
        anyhow::bail!("--size must be positive, got {size}");
    }
    Ok(size.min(config.max_size))
}

/// Seeded for reproducible spins, otherwise drawn from OS entropy.
fn spin_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

fn check(text: &str, config: &WheelConfig) -> anyhow::Result<ExitCode> {
    let parsed = parse_options(text);
    for issue in &parsed.issues {
        eprintln!("line {}: {}", issue.line, issue.error);
    }

    let status = Status::with_config(&parsed, config);
    if !status.is_ready() {
        println!("{status}");
        return Ok(ExitCode::FAILURE);
    }

    for option in &parsed.options {
        println!("{:>6}%  {}", format_percent(option.weight), option.label);
    }
    println!(
        "OK: {} options, total {}%",
        parsed.options.len(),
        format_percent(parsed.total_weight)
    );
    Ok(ExitCode::SUCCESS)
}

fn spin(
    text: String,
    config: WheelConfig,
    seed: Option<u64>,
    svg_path: Option<&Path>,
) -> anyhow::Result<ExitCode> {
    let max_size = config.max_size;
    let mut controller = Controller::new(config, spin_rng(seed), max_size);
    controller.handle(WheelEvent::TextChanged(text));

    let mut now = 0.0;
    controller.handle(WheelEvent::SpinRequested { now_ms: now });
    if !controller.is_spinning() {
        println!("{}", controller.status_message());
        return Ok(ExitCode::FAILURE);
    }

    let mut frames = 0u32;
    while controller.is_spinning() {
        now += FRAME_MS;
        controller.handle(WheelEvent::Frame { now_ms: now });
        frames += 1;
    }
    log::info!("settled after {frames} frames ({now:.0} ms)");

    println!("{}", controller.result());

    if let Some(path) = svg_path {
        let mut svg = SvgSurface::new();
        controller.render(&mut svg, &WheelTheme::light());
        write_output(Some(path), &svg.finish())?;
    }
    Ok(ExitCode::SUCCESS)
}
