use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use skyview_catalog::{CatalogEntry, StarCatalog};
use skyview_coords::{CelestialCoordinates, OrientationToSky};
use skyview_core::{format_dec, format_ra, GeodeticPosition, Quaternion};
use skyview_session::{CenterDetection, SkyBody, SkyOverlay, ViewConfig, ViewSession};
use skyview_time::{FixedClock, SiderealClock, SystemClock, UtcClock};
use skyview_wcs::Projection;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProjectionArg {
    Stereographic,
    Gnomonic,
}

impl From<ProjectionArg> for Projection {
    fn from(arg: ProjectionArg) -> Self {
        match arg {
            ProjectionArg::Stereographic => Projection::Stereographic,
            ProjectionArg::Gnomonic => Projection::Gnomonic,
        }
    }
}

#[derive(Parser)]
#[command(name = "skyview")]
#[command(about = "Sky coordinates and star overlays from device orientation")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Observer {
    /// Latitude in degrees, positive north
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, positive east
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// Altitude in meters
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    alt: f64,
    /// Device attitude quaternion as x,y,z,w
    #[arg(long, value_parser = parse_quaternion, allow_hyphen_values = true)]
    quat: Quaternion,
    /// UTC instant (RFC 3339); defaults to now
    #[arg(long, value_parser = parse_time)]
    time: Option<DateTime<Utc>>,
}

#[derive(Subcommand)]
enum Commands {
    /// Where the device points: RA/Dec and Az/Alt
    Sky {
        #[command(flatten)]
        observer: Observer,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Greenwich and local mean sidereal time
    Lst {
        /// Longitude in degrees, positive east
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// UTC instant (RFC 3339); defaults to now
        #[arg(long, value_parser = parse_time)]
        time: Option<DateTime<Utc>>,
    },
    /// Catalog stars placed on a camera frame
    Overlay {
        /// Star catalog (JSON array of {Name, Ra, Dec})
        #[arg(long)]
        catalog: PathBuf,
        #[command(flatten)]
        observer: Observer,
        /// Image width in pixels
        #[arg(long)]
        width: u32,
        /// Image height in pixels
        #[arg(long)]
        height: u32,
        /// JSON file with view settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Field of view in degrees across the shorter image side
        #[arg(long)]
        fov: Option<f64>,
        /// Faintest magnitude to show
        #[arg(long, allow_negative_numbers = true)]
        max_mag: Option<f64>,
        #[arg(long, value_enum)]
        projection: Option<ProjectionArg>,
        /// Extra solar-system body as name:ra_hours:dec_degrees (repeatable)
        #[arg(long = "body", value_parser = parse_body, allow_hyphen_values = true)]
        bodies: Vec<SkyBody>,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Rectangular RA/Dec range query
    Query {
        /// Star catalog (JSON array of {Name, Ra, Dec})
        #[arg(long)]
        catalog: PathBuf,
        /// Center right ascension in hours
        #[arg(long)]
        ra: f64,
        /// Center declination in degrees
        #[arg(long, allow_negative_numbers = true)]
        dec: f64,
        /// Box width in degrees
        #[arg(long)]
        width: f64,
        /// Box height in degrees
        #[arg(long)]
        height: f64,
        /// Faintest magnitude to include
        #[arg(long, allow_negative_numbers = true)]
        max_mag: Option<f64>,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Sky { observer, format } => {
            let position = observer.position()?;
            let coords = OrientationToSky::with_clock(clock(observer.time))
                .compute(&position, &observer.quat);
            match format {
                OutputFormat::Table => print_coordinates(&coords),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&coords)?),
            }
        }
        Commands::Lst { lon, time } => {
            let sidereal = SiderealClock::new(clock(time));
            let gmst = sidereal.gmst();
            let lst = sidereal.local_sidereal_time(lon);
            println!("GMST: {:.6}° ({})", gmst.degrees(), format_ra(gmst.hours()));
            println!("LST:  {:.6}° ({})", lst.degrees(), format_ra(lst.hours()));
        }
        Commands::Overlay {
            catalog,
            observer,
            width,
            height,
            config,
            fov,
            max_mag,
            projection,
            bodies,
            format,
        } => {
            let mut view = match config {
                Some(path) => load_config(&path)?,
                None => ViewConfig::default(),
            };
            if let Some(fov) = fov {
                view.fov_degrees = fov;
            }
            if let Some(max_mag) = max_mag {
                view.max_magnitude = max_mag;
            }
            if let Some(projection) = projection {
                view.projection = projection.into();
            }

            let catalog = Arc::new(
                StarCatalog::open(&catalog)
                    .with_context(|| format!("Failed to load catalog {:?}", catalog))?,
            );
            let position = observer.position()?;
            let session = ViewSession::with_clock(catalog, view, clock(observer.time))?;
            let overlay =
                session.frame_with_bodies(&position, &observer.quat, width, height, bodies);

            match format {
                OutputFormat::Table => print_overlay(&overlay, view.center_square_ratio),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&overlay)?),
            }
        }
        Commands::Query {
            catalog,
            ra,
            dec,
            width,
            height,
            max_mag,
            format,
        } => {
            let catalog = StarCatalog::open(&catalog)
                .with_context(|| format!("Failed to load catalog {:?}", catalog))?;
            let found = catalog.stars_in_view(
                ra,
                dec,
                width,
                height,
                max_mag.unwrap_or(f64::INFINITY),
            );
            match format {
                OutputFormat::Table => print_entries(&found),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&found)?),
            }
        }
    }

    Ok(())
}

impl Observer {
    fn position(&self) -> anyhow::Result<GeodeticPosition> {
        GeodeticPosition::try_new(self.lat, self.lon, self.alt).context("Invalid observer position")
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn clock(time: Option<DateTime<Utc>>) -> Box<dyn UtcClock> {
    match time {
        Some(t) => Box::new(FixedClock::new(t)),
        None => Box::new(SystemClock),
    }
}

fn load_config(path: &Path) -> anyhow::Result<ViewConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse config {:?}", path))
}

fn parse_quaternion(s: &str) -> Result<Quaternion, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid quaternion component: {e}"))?;
    match parts.as_slice() {
        &[x, y, z, w] => Ok(Quaternion::new(x, y, z, w)),
        _ => Err(format!("expected 4 components x,y,z,w, got {}", parts.len())),
    }
}

fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 time '{s}': {e}"))
}

fn parse_body(s: &str) -> Result<SkyBody, String> {
    let mut parts = s.split(':');
    let (Some(name), Some(ra), Some(dec), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected name:ra_hours:dec_degrees, got '{s}'"));
    };
    let ra: f64 = ra.parse().map_err(|e| format!("invalid RA '{ra}': {e}"))?;
    let dec: f64 = dec.parse().map_err(|e| format!("invalid Dec '{dec}': {e}"))?;
    Ok(SkyBody::solar_system(name, ra, dec))
}

fn print_coordinates(coords: &CelestialCoordinates) {
    println!("RA:       {} ({:.6}h)", coords.formatted_ra(), coords.ra_hours());
    println!("Dec:      {} ({:+.6}°)", coords.formatted_dec(), coords.dec_degrees());
    println!("Azimuth:  {:.2}°", coords.azimuth_degrees());
    println!("Altitude: {:+.2}°", coords.altitude_degrees());
}

fn print_overlay(overlay: &SkyOverlay, square_ratio: f64) {
    println!("Center: {}", overlay.center());
    for (i, placed) in overlay.bodies().iter().enumerate() {
        println!(
            "{:4}: {:<20} {:<6} RA={} Dec={} x={:.1} y={:.1}",
            i + 1,
            placed.body.name,
            placed.body.kind,
            placed.formatted_ra(),
            placed.formatted_dec(),
            placed.pixel.x(),
            placed.pixel.y()
        );
    }

    if overlay.is_empty() {
        println!("No bodies in view.");
        return;
    }
    println!("\nTotal placed: {}", overlay.len());

    match overlay.identify_center(square_ratio) {
        CenterDetection::InSquare(b) => {
            println!("In center square: {} ({})", b.body.name.to_uppercase(), b.body.kind)
        }
        CenterDetection::Closest { body, distance_px } => println!(
            "Closest to center: {} ({}), {:.0} px away",
            body.body.name.to_uppercase(),
            body.body.kind,
            distance_px
        ),
        CenterDetection::Nothing => {}
    }
}

fn print_entries(entries: &[&CatalogEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        let mag = entry
            .magnitude
            .map_or_else(|| "    -".to_string(), |m| format!("{m:5.2}"));
        println!(
            "{:4}: {:<20} RA={} Dec={} Mag={}",
            i + 1,
            entry.name,
            format_ra(entry.ra_hours),
            format_dec(entry.dec_degrees),
            mag
        );
    }

    if entries.is_empty() {
        println!("No stars found matching the search criteria.");
    } else {
        println!("\nTotal results: {}", entries.len());
    }
}
