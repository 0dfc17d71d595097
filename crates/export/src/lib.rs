//! Export helpers for CSV curves and JSON result sidecars.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod curve {
    use std::io::{self, Write};

    /// Two-column table of curve samples.
    #[derive(Debug, Clone, Copy)]
    pub struct CurveTable<'a> {
        pub x_label: &'a str,
        pub y_label: &'a str,
        pub x: &'a [f64],
        pub y: &'a [f64],
    }

    /// Write the header row followed by one row per sample.
    pub fn write_csv(writer: &mut dyn Write, table: &CurveTable<'_>) -> io::Result<()> {
        if table.x.len() != table.y.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "curve columns differ in length ({} vs {})",
                    table.x.len(),
                    table.y.len()
                ),
            ));
        }
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record([table.x_label, table.y_label])?;
        for (x, y) in table.x.iter().zip(table.y) {
            csv_writer.write_record([format!("{:.6}", x), format!("{:.6}", y)])?;
        }
        csv_writer.flush()
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};
    use std::path::Path;

    /// One input parameter as it was used for the evaluation.
    #[derive(Debug, Clone, Serialize)]
    pub struct Parameter<'a> {
        pub key: &'a str,
        pub value: f64,
        pub unit: &'a str,
    }

    /// One computed quantity.
    #[derive(Debug, Clone, Serialize)]
    pub struct Quantity<'a> {
        pub name: &'a str,
        pub value: f64,
        pub unit: &'a str,
    }

    /// Envelope written to the JSON sidecar.
    #[derive(Debug, Serialize)]
    pub struct Summary<'a> {
        pub topic: &'a str,
        pub parameters: Vec<Parameter<'a>>,
        pub results: Vec<Quantity<'a>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub energy_band: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub curve_points: Option<usize>,
    }

    /// Write the summary as pretty-printed JSON.
    pub fn write_json(output: &Path, summary: &Summary<'_>) -> io::Result<()> {
        let mut writer = super::writer_for_path(output)?;
        to_writer_pretty(&mut writer, summary)?;
        writeln!(writer)?;
        writer.flush()
    }
}
