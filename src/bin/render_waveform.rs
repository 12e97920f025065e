//! Prints the sum of a preset waveform's harmonics as JSON.
//!
//! ```text
//! render_waveform [--config <path>] [waveform] [sine|cosine] [space|time]
//! ```

use anyhow::{anyhow, bail, Context};
use serde::Serialize;

use fourier_waves::axis::{X_AXIS_DEFAULT_LEVEL, X_AXIS_LADDER};
use fourier_waves::chart::{max_abs_y, sum_data_set, ChartSnapshot};
use fourier_waves::config::{load_config, SimulationConfig};
use fourier_waves::model::{Domain, SeriesType};
use fourier_waves::sampling::Point;
use fourier_waves::waveform::Waveform;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Rendered<'a> {
    waveform: Waveform,
    series_type: SeriesType,
    domain: Domain,
    amplitudes: Vec<f64>,
    max_abs_y: f64,
    points: &'a [Point],
}

fn parse_series_type(s: &str) -> anyhow::Result<SeriesType> {
    match s {
        "sine" | "sin" => Ok(SeriesType::Sine),
        "cosine" | "cos" => Ok(SeriesType::Cosine),
        other => bail!("unknown series type '{}'", other),
    }
}

fn parse_domain(s: &str) -> anyhow::Result<Domain> {
    match s {
        "space" => Ok(Domain::Space),
        "time" => Ok(Domain::Time),
        other => bail!("unknown domain '{}' (space-and-time needs a clock)", other),
    }
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1).peekable();

    let config = if args.peek().map(String::as_str) == Some("--config") {
        args.next();
        let path = args.next().context("--config needs a path")?;
        load_config(&path).with_context(|| format!("loading {}", path))?
    } else {
        SimulationConfig::default()
    };

    let waveform: Waveform = match args.next() {
        Some(name) => name.parse().map_err(|e: String| anyhow!(e))?,
        None => Waveform::Square,
    };
    let series_type = args
        .next()
        .map(|s| parse_series_type(&s))
        .transpose()?
        .unwrap_or_default();
    let domain = args
        .next()
        .map(|s| parse_domain(&s))
        .transpose()?
        .unwrap_or_default();

    let mut series = config.fourier_series();
    let amplitudes = waveform
        .amplitudes(series.number_of_harmonics(), series_type)
        .ok_or_else(|| anyhow!("{:?} has no preset for {:?}", waveform, series_type))?;
    series.set_amplitudes(&amplitudes);

    let snapshot = ChartSnapshot::new(domain, series_type, 0.0, X_AXIS_DEFAULT_LEVEL);
    let data_set = sum_data_set(&series, &snapshot, &X_AXIS_LADDER, config.sum_points);

    let rendered = Rendered {
        waveform,
        series_type,
        domain,
        amplitudes: series.amplitudes(),
        max_abs_y: max_abs_y(&data_set),
        points: data_set.points(),
    };
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}
