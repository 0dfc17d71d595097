use std::path::{Path, PathBuf};

use clap::Parser;
use csv::ReaderBuilder;
use physics_explorer::logging::init_tracing;
use physics_explorer::plot::{PlotRequest, render_curve_png};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a two-column curve CSV (as written by `physics --csv`) to PNG"
)]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "artifacts/curve.png")]
    output: PathBuf,
    #[arg(long, default_value = "Curve")]
    title: String,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 700)]
    height: u32,
    /// Skip caption and axis text
    #[arg(long, default_value_t = false)]
    no_labels: bool,
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

struct Columns {
    x_label: String,
    y_label: String,
    x: Vec<f64>,
    y: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let columns = read_columns(&cli.input)?;
    if columns.x.is_empty() {
        return Err(anyhow::anyhow!(
            "No samples in {}",
            cli.input.display()
        ));
    }
    debug!(rows = columns.x.len(), input = %cli.input.display(), "read curve");

    let request = PlotRequest {
        width: cli.width,
        height: cli.height,
        labels: !cli.no_labels,
        ..PlotRequest::new(
            &cli.title,
            &columns.x_label,
            &columns.y_label,
            &columns.x,
            &columns.y,
        )
    };
    render_curve_png(&cli.output, &request)?;
    println!("Wrote plot to {}", cli.output.display());
    Ok(())
}

fn read_columns(path: &Path) -> anyhow::Result<Columns> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        return Err(anyhow::anyhow!("CSV needs an x and a y column"));
    }
    let mut columns = Columns {
        x_label: headers[0].to_string(),
        y_label: headers[1].to_string(),
        x: Vec::new(),
        y: Vec::new(),
    };
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let parse = |idx: usize| -> anyhow::Result<f64> {
            let field = record.get(idx).unwrap_or("").trim();
            field
                .parse()
                .map_err(|_| anyhow::anyhow!("row {}: `{field}` is not a number", row + 1))
        };
        columns.x.push(parse(0)?);
        columns.y.push(parse(1)?);
    }
    Ok(columns)
}
