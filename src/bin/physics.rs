use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use physics_explorer::config::{
    SimulatorConfig, TopicCatalog, load_parameter_overrides, load_simulator_config,
};
use physics_explorer::export::curve::{CurveTable, write_csv};
use physics_explorer::export::summary::{Parameter, Quantity, Summary, write_json};
use physics_explorer::export::writer_for_path;
use physics_explorer::logging::init_tracing;
use physics_explorer::plot::{PlotRequest, render_curve_png};
use physics_explorer::topics::{Evaluation, Sampling, Topic, TopicKind, evaluate};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Physics explorer: closed-form formulas for eleven introductory topics"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Simulator settings file (TOML or YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Parameter range overrides (YAML list, TOML record, or directory of TOML records)
    #[arg(long, global = true)]
    ranges: Option<PathBuf>,

    /// Number of curve samples (overrides the config file)
    #[arg(long, global = true)]
    points: Option<usize>,

    /// Write the curve as CSV (`-` for stdout)
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Write parameters and results as a JSON sidecar
    #[arg(long, global = true)]
    json: Option<PathBuf>,

    /// Render the curve as a PNG chart
    #[arg(long, global = true)]
    plot: Option<PathBuf>,

    /// Skip caption and axis text in the PNG
    #[arg(long, global = true, default_value_t = false)]
    no_labels: bool,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List topics with their parameter ranges and defaults
    List,
    /// Projectile launched from level ground
    Projectile {
        /// Initial velocity (m/s)
        #[arg(long)]
        velocity: Option<f64>,
        /// Launch angle (degrees)
        #[arg(long)]
        angle: Option<f64>,
        /// Gravitational acceleration (m/s²), defaults to the config value
        #[arg(long)]
        gravity: Option<f64>,
    },
    /// Object dropped from rest
    FreeFall {
        /// Initial height (m)
        #[arg(long)]
        height: Option<f64>,
        /// Gravitational acceleration (m/s²), defaults to the config value
        #[arg(long)]
        gravity: Option<f64>,
    },
    /// Simple harmonic motion
    Shm {
        /// Time period (s)
        #[arg(long)]
        period: Option<f64>,
        /// Amplitude (m)
        #[arg(long)]
        amplitude: Option<f64>,
    },
    /// Elliptical orbit around the Sun
    Orbit {
        /// Semi-major axis (AU)
        #[arg(long)]
        semi_major_axis: Option<f64>,
        /// Eccentricity
        #[arg(long)]
        eccentricity: Option<f64>,
    },
    /// Hydrogen electron transition between levels
    EnergyTransition {
        /// Initial energy level
        #[arg(long)]
        n_initial: Option<f64>,
        /// Final energy level
        #[arg(long)]
        n_final: Option<f64>,
    },
    /// Photon energy from Planck's constant
    PhotonEnergy {
        /// Frequency exponent x for 10^x Hz
        #[arg(long)]
        frequency_exponent: Option<f64>,
    },
    /// Mass-energy equivalence
    MassEnergy {
        /// Mass (kg)
        #[arg(long)]
        mass: Option<f64>,
    },
    /// Stress and strain of a loaded bar
    StressStrain {
        /// Applied force (N)
        #[arg(long)]
        force: Option<f64>,
        /// Cross-sectional area (m²)
        #[arg(long)]
        area: Option<f64>,
        /// Original length (m)
        #[arg(long)]
        length: Option<f64>,
        /// Extension (m)
        #[arg(long)]
        extension: Option<f64>,
    },
    /// Entropy change for heat transferred
    Entropy {
        /// Heat transferred (J)
        #[arg(long)]
        heat: Option<f64>,
        /// Initial temperature (K)
        #[arg(long)]
        t_initial: Option<f64>,
        /// Final temperature (K)
        #[arg(long)]
        t_final: Option<f64>,
    },
    /// Centripetal force on a body in circular motion
    Centripetal {
        /// Mass (kg)
        #[arg(long)]
        mass: Option<f64>,
        /// Radius (m)
        #[arg(long)]
        radius: Option<f64>,
        /// Velocity (m/s)
        #[arg(long)]
        velocity: Option<f64>,
    },
    /// Thin lens image distance
    Lens {
        /// Focal length (m), negative for a diverging lens
        #[arg(long, allow_negative_numbers = true)]
        focal_length: Option<f64>,
        /// Object distance (m)
        #[arg(long, allow_negative_numbers = true)]
        object_distance: Option<f64>,
    },
}

/// A topic subcommand reduced to its catalog keys.
struct Selection {
    kind: TopicKind,
    requested: Vec<(&'static str, Option<f64>)>,
    gravity: Option<f64>,
}

impl Selection {
    fn new(kind: TopicKind, requested: Vec<(&'static str, Option<f64>)>) -> Self {
        Self {
            kind,
            requested,
            gravity: None,
        }
    }

    fn lookup(&self, key: &str) -> Option<f64> {
        self.requested
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, value)| *value)
    }
}

impl Command {
    fn selection(&self) -> Option<Selection> {
        let selection = match *self {
            Command::List => return None,
            Command::Projectile {
                velocity,
                angle,
                gravity,
            } => Selection {
                gravity,
                ..Selection::new(
                    TopicKind::Projectile,
                    vec![("velocity", velocity), ("angle", angle)],
                )
            },
            Command::FreeFall { height, gravity } => Selection {
                gravity,
                ..Selection::new(TopicKind::FreeFall, vec![("height", height)])
            },
            Command::Shm { period, amplitude } => Selection::new(
                TopicKind::Shm,
                vec![("period", period), ("amplitude", amplitude)],
            ),
            Command::Orbit {
                semi_major_axis,
                eccentricity,
            } => Selection::new(
                TopicKind::Orbit,
                vec![
                    ("semi-major-axis", semi_major_axis),
                    ("eccentricity", eccentricity),
                ],
            ),
            Command::EnergyTransition { n_initial, n_final } => Selection::new(
                TopicKind::EnergyTransition,
                vec![("n-initial", n_initial), ("n-final", n_final)],
            ),
            Command::PhotonEnergy { frequency_exponent } => Selection::new(
                TopicKind::PhotonEnergy,
                vec![("frequency-exponent", frequency_exponent)],
            ),
            Command::MassEnergy { mass } => {
                Selection::new(TopicKind::MassEnergy, vec![("mass", mass)])
            }
            Command::StressStrain {
                force,
                area,
                length,
                extension,
            } => Selection::new(
                TopicKind::StressStrain,
                vec![
                    ("force", force),
                    ("area", area),
                    ("length", length),
                    ("extension", extension),
                ],
            ),
            Command::Entropy {
                heat,
                t_initial,
                t_final,
            } => Selection::new(
                TopicKind::Entropy,
                vec![
                    ("heat", heat),
                    ("t-initial", t_initial),
                    ("t-final", t_final),
                ],
            ),
            Command::Centripetal {
                mass,
                radius,
                velocity,
            } => Selection::new(
                TopicKind::Centripetal,
                vec![("mass", mass), ("radius", radius), ("velocity", velocity)],
            ),
            Command::Lens {
                focal_length,
                object_distance,
            } => Selection::new(
                TopicKind::Lens,
                vec![
                    ("focal-length", focal_length),
                    ("object-distance", object_distance),
                ],
            ),
        };
        Some(selection)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => load_simulator_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulatorConfig::default(),
    };
    if let Some(path) = &cli.ranges {
        let overrides = load_parameter_overrides(path)
            .with_context(|| format!("loading parameter ranges {}", path.display()))?;
        config.overrides.extend(overrides);
    }
    if let Some(points) = cli.points {
        config.curve_points = points;
        config.orbit_points = points;
    }
    let catalog = config.catalog()?;

    let Some(selection) = cli.command.selection() else {
        print_menu(&catalog);
        return Ok(());
    };

    let gravity = selection.gravity.unwrap_or(config.gravity_m_s2);
    let topic = Topic::resolve(selection.kind, &catalog, gravity, |key| {
        selection.lookup(key)
    })?;
    let evaluation = match evaluate(&topic, &Sampling::from(&config)) {
        Ok(evaluation) => evaluation,
        Err(err) if err.is_warning() => {
            eprintln!("[warn] {err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    // a `-` export owns stdout, so the report moves to stderr
    let to_stdout = |path: &Option<PathBuf>| path.as_deref() == Some(Path::new("-"));
    if to_stdout(&cli.csv) && to_stdout(&cli.json) {
        return Err(anyhow::anyhow!("--csv and --json cannot both write to stdout"));
    }
    let mut report: Box<dyn Write> = if to_stdout(&cli.csv) || to_stdout(&cli.json) {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    print_evaluation(&mut report, &topic, &evaluation)?;

    if let Some(path) = &cli.csv {
        write_curve_csv(path, &evaluation)?;
    }
    if let Some(path) = &cli.json {
        write_summary(path, &topic, &evaluation)?;
    }
    if let Some(path) = &cli.plot {
        plot_curve(&mut report, path, &evaluation, !cli.no_labels)?;
    }
    Ok(())
}

fn print_menu(catalog: &TopicCatalog) {
    println!("Available topics:");
    for kind in TopicKind::ALL {
        println!("  {:<18} {}", kind.name(), kind.label());
        for spec in catalog.parameters(kind.name()).unwrap_or_default() {
            let unit = if spec.unit.is_empty() {
                String::new()
            } else {
                format!(" {}", spec.unit)
            };
            println!(
                "      --{:<20} {} [{} .. {}{unit}], default {}",
                spec.key, spec.label, spec.min, spec.max, spec.default
            );
        }
    }
}

fn print_evaluation(
    out: &mut dyn Write,
    topic: &Topic,
    evaluation: &Evaluation,
) -> io::Result<()> {
    writeln!(out, "=== {} ===", evaluation.kind.label())?;
    for (key, value, unit) in topic.parameters() {
        writeln!(out, "  {key} = {}", with_unit(value, unit))?;
    }
    for scalar in &evaluation.scalars {
        writeln!(out, "{}: {}", scalar.name, with_unit(scalar.value, scalar.unit))?;
    }
    if let Some(band) = evaluation.band {
        writeln!(out, "Comparison: {}", band.description())?;
    }
    if let Some(curve) = &evaluation.curve {
        writeln!(
            out,
            "Curve: {} points ({} vs {})",
            curve.len(),
            curve.y_label(),
            curve.x_label()
        )?;
    }
    out.flush()
}

fn with_unit(value: f64, unit: &str) -> String {
    let formatted = format_value(value);
    if unit.is_empty() {
        formatted
    } else {
        format!("{formatted} {unit}")
    }
}

/// Two decimals, or scientific notation for very large and very small magnitudes.
fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if value != 0.0 && !(1.0e-3..1.0e6).contains(&magnitude) {
        format!("{value:.2e}")
    } else {
        format!("{value:.2}")
    }
}

fn write_curve_csv(path: &Path, evaluation: &Evaluation) -> anyhow::Result<()> {
    let Some(curve) = &evaluation.curve else {
        eprintln!("[warn] {} has no curve; skipping CSV", evaluation.kind.name());
        return Ok(());
    };
    let mut writer = writer_for_path(path)
        .with_context(|| format!("opening CSV output {}", path.display()))?;
    write_csv(
        &mut writer,
        &CurveTable {
            x_label: curve.x_label(),
            y_label: curve.y_label(),
            x: curve.x(),
            y: curve.y(),
        },
    )?;
    Ok(())
}

fn write_summary(path: &Path, topic: &Topic, evaluation: &Evaluation) -> anyhow::Result<()> {
    let summary = Summary {
        topic: evaluation.kind.name(),
        parameters: topic
            .parameters()
            .into_iter()
            .map(|(key, value, unit)| Parameter { key, value, unit })
            .collect(),
        results: evaluation
            .scalars
            .iter()
            .map(|s| Quantity {
                name: s.name,
                value: s.value,
                unit: s.unit,
            })
            .collect(),
        energy_band: evaluation.band.map(|band| band.name()),
        curve_points: evaluation.curve.as_ref().map(|curve| curve.len()),
    };
    write_json(path, &summary).with_context(|| format!("writing JSON {}", path.display()))?;
    Ok(())
}

fn plot_curve(
    report: &mut dyn Write,
    path: &Path,
    evaluation: &Evaluation,
    labels: bool,
) -> anyhow::Result<()> {
    let Some(curve) = &evaluation.curve else {
        eprintln!("[warn] {} has no curve; skipping plot", evaluation.kind.name());
        return Ok(());
    };
    let mut request = PlotRequest::new(
        evaluation.kind.label(),
        curve.x_label(),
        curve.y_label(),
        curve.x(),
        curve.y(),
    );
    request.labels = labels;
    if evaluation.kind == TopicKind::Orbit {
        request.marker = Some((0.0, 0.0));
    }
    render_curve_png(path, &request)?;
    writeln!(report, "Wrote plot to {}", path.display())?;
    Ok(())
}
