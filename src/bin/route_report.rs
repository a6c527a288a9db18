use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use route_wind_analyzer::analysis::compute_full_analysis;
use route_wind_analyzer::export::{segments, summary};
use route_wind_analyzer::geo::coord::Coordinate;
use route_wind_analyzer::geo::units::ms_to_kmh;
use route_wind_analyzer::report::{RouteWindReport, analyze_route};
use route_wind_analyzer::route::Route;
use route_wind_analyzer::weather::{FixedProvider, WindObservation, load_observation};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Per-segment and whole-path wind impact report for a travel route"
)]
struct Cli {
    /// Route CSV with one `lat,lon` row per point
    #[arg(long, conflicts_with = "headings")]
    route: Option<PathBuf>,

    /// Comma-separated segment headings in degrees (alternative to --route)
    #[arg(long)]
    headings: Option<String>,

    /// Wind observation YAML (direction_deg/speed_ms/temperature_c)
    #[arg(long)]
    observation: Option<PathBuf>,

    /// Wind origin bearing in degrees
    #[arg(long)]
    wind_dir: Option<i32>,

    /// Wind speed in m/s
    #[arg(long)]
    wind_speed: Option<f64>,

    /// Air temperature in Celsius
    #[arg(long, default_value_t = 15.0)]
    temperature: f64,

    /// Write the per-segment CSV here (`-` for stdout); a JSON summary
    /// sidecar lands next to it
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.route.is_none() && cli.headings.is_none() {
        return Err(anyhow::anyhow!("provide either --route or --headings"));
    }

    let observation = resolve_observation(&cli)?;

    let (headings, report) = if let Some(path) = &cli.route {
        let route = read_route(path)?;
        let headings = route.segment_headings();
        let report = analyze_route(&route, &FixedProvider(observation))?;
        (headings, report)
    } else {
        let headings = parse_headings(cli.headings.as_deref().unwrap_or_default())?;
        let analysis = compute_full_analysis(&headings, &observation)?;
        let report = RouteWindReport {
            observation,
            segments: analysis.segments,
            summary: analysis.summary,
        };
        (headings, report)
    };

    print_report(&headings, &report);

    if let Some(out) = &cli.out {
        write_exports(out, &headings, &report)?;
    }
    Ok(())
}

fn parse_headings(list: &str) -> anyhow::Result<Vec<i32>> {
    let mut headings = Vec::new();
    for part in list.split(',') {
        headings.push(part.trim().parse::<i32>().map_err(|_| {
            anyhow::anyhow!("heading '{}' is not an integer degree", part.trim())
        })?);
    }
    Ok(headings)
}

fn resolve_observation(cli: &Cli) -> anyhow::Result<WindObservation> {
    if let Some(path) = &cli.observation {
        return Ok(load_observation(path)?);
    }
    match (cli.wind_dir, cli.wind_speed) {
        (Some(direction_deg), Some(speed_ms)) => Ok(WindObservation {
            direction_deg,
            speed_ms,
            temperature_c: cli.temperature,
        }),
        _ => Err(anyhow::anyhow!(
            "provide --observation or both --wind-dir and --wind-speed"
        )),
    }
}

fn read_route(path: &Path) -> anyhow::Result<Route> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 2 {
            return Err(anyhow::anyhow!(
                "route row {} needs `lat,lon`",
                points.len() + 1
            ));
        }
        let latitude: f64 = record[0].parse()?;
        let longitude: f64 = record[1].parse()?;
        points.push(Coordinate::new(latitude, longitude));
    }
    Ok(Route::new(points))
}

fn print_report(headings: &[i32], report: &RouteWindReport) {
    println!(
        "Wind {:.1} m/s ({:.1} km/h) from {} deg, air {:.1} C",
        report.observation.speed_ms,
        ms_to_kmh(report.observation.speed_ms),
        report.observation.direction_deg,
        report.observation.temperature_c,
    );
    println!("segment  heading  relative  headwind  tailwind  crosswind");
    for (index, (heading, impact)) in headings.iter().zip(&report.segments).enumerate() {
        println!(
            "{:>7}  {:>7}  {:>8.1}  {:>7.0}%  {:>7.0}%  {:>8.0}%",
            index,
            heading,
            impact.relative_angle_deg,
            impact.headwind_pct,
            impact.tailwind_pct,
            impact.crosswind_pct,
        );
    }
    println!(
        "path mean: headwind {:.2}%, tailwind {:.2}%, crosswind {:.2}%",
        report.summary.headwind_pct, report.summary.tailwind_pct, report.summary.crosswind_pct,
    );
}

fn write_exports(out: &Path, headings: &[i32], report: &RouteWindReport) -> anyhow::Result<()> {
    let mut writer = segments::writer_for_path(out)?;
    segments::write_header(writer.as_mut())?;
    for (index, (heading, impact)) in headings.iter().zip(&report.segments).enumerate() {
        segments::Record {
            segment_index: index,
            heading_deg: *heading,
            relative_angle_deg: impact.relative_angle_deg,
            headwind_pct: impact.headwind_pct,
            tailwind_pct: impact.tailwind_pct,
            crosswind_pct: impact.crosswind_pct,
        }
        .write_to(writer.as_mut())?;
    }
    writer.flush()?;

    // No sidecar when the table goes to stdout.
    if out != Path::new("-") {
        let sidecar = summary::Summary {
            generated_utc: summary::timestamp_utc(),
            segment_count: report.segments.len(),
            temperature_c: report.summary.temperature_c,
            wind_speed_ms: report.summary.wind_speed_ms,
            headwind_pct: report.summary.headwind_pct,
            tailwind_pct: report.summary.tailwind_pct,
            crosswind_pct: report.summary.crosswind_pct,
        };
        summary::write_sidecar(&out.with_extension("summary.json"), &sidecar)?;
    }
    Ok(())
}
