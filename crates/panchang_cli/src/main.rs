use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use panchang_base::{ALL_MASAS, Location, Masa, tithi_name};
use panchang_ephem::AnalyticEphemeris;
use panchang_search::{
    PanchangConfig, PanchangSnapshot, RashiChart, SankrantiEvent, TithiBoundaryTable,
    compute_all_tithi_boundaries, load_table, panchang_for_day, rashi_chart, sankrantis_for_year,
    save_table, to_json,
};
use panchang_time::{CivilDate, CivilTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "panchang", about = "Panchang almanac CLI")]
struct Cli {
    /// Latitude in degrees, north positive
    #[arg(long, global = true, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, global = true, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// UTC offset in hours (IST = 5.5)
    #[arg(long, global = true, allow_hyphen_values = true)]
    tz: Option<f64>,
    /// Elevation in meters
    #[arg(long, global = true)]
    elevation: Option<f64>,
    /// TOML file with search settings and an optional [location] table
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Panchang for one civil date
    Snapshot {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Every tithi boundary of a year
    Boundaries {
        #[arg(long)]
        year: i32,
        /// Write the JSON cache here instead of printing
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// The twelve sankrantis of a year
    Sankranti {
        #[arg(long)]
        year: i32,
    },
    /// Rashi of each graha at a local instant
    RashiChart {
        /// Local time (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        date: String,
    },
    /// Find a tithi in a given masa of a year
    TithiLookup {
        #[arg(long)]
        year: i32,
        /// Tithi ordinal, 1 (Shukla Pratipada) to 30 (Amavasya)
        #[arg(long)]
        tithi: u8,
        /// Masa name (Chaitra..Phalguna) or number 1-12
        #[arg(long)]
        masa: String,
        /// Prefer the adhika month when the masa repeats
        #[arg(long)]
        leap: bool,
    },
    /// Validate and print a boundary cache file
    LoadCache {
        #[arg(long)]
        file: PathBuf,
        /// Year of the table; read from the file when omitted
        #[arg(long)]
        year: Option<i32>,
    },
}

/// Contents of the `--config` file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FileConfig {
    #[serde(flatten)]
    search: PanchangConfig,
    location: Option<Location>,
}

fn load_file_config(path: Option<&Path>) -> Result<FileConfig> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: FileConfig = toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Flags win over the file. Latitude, longitude and offset must come from
/// one or the other.
fn resolve_location(cli: &Cli, file: Option<Location>) -> Result<Location> {
    let lat = cli.lat.or(file.map(|l| l.latitude_deg));
    let lon = cli.lon.or(file.map(|l| l.longitude_deg));
    let tz = cli.tz.or(file.map(|l| l.utc_offset_hours));
    let elevation = cli.elevation.or(file.map(|l| l.elevation_m)).unwrap_or(0.0);
    let (Some(lat), Some(lon), Some(tz)) = (lat, lon, tz) else {
        bail!("location required: pass --lat, --lon and --tz or a [location] table in --config");
    };
    let location = Location::new(lat, lon, elevation, tz);
    location.validate()?;
    Ok(location)
}

/// Location for reading a cache: UTC at the origin when none was given at
/// all, otherwise the same rules as [`resolve_location`].
fn cache_location(cli: &Cli, file: Option<Location>) -> Result<Location> {
    let given = cli.lat.is_some() || cli.lon.is_some() || cli.tz.is_some() || cli.elevation.is_some();
    if !given && file.is_none() {
        return Ok(Location::new(0.0, 0.0, 0.0, 0.0));
    }
    resolve_location(cli, file)
}

/// `YYYY-MM-DDTHH:MM` at `offset_hours`.
fn parse_local_minute(s: &str, offset_hours: f64) -> Result<CivilTime> {
    let (date, time) = s
        .split_once('T')
        .ok_or_else(|| anyhow!("expected YYYY-MM-DDTHH:MM, got {s}"))?;
    let date = CivilDate::parse(date)?;
    let (h, m) = time
        .split_once(':')
        .ok_or_else(|| anyhow!("expected HH:MM, got {time}"))?;
    let t = CivilTime::new(date.year, date.month, date.day, h.parse()?, m.parse()?, 0.0, offset_hours);
    t.validate()?;
    Ok(t)
}

fn parse_masa(s: &str) -> Result<Masa> {
    if let Ok(n) = s.parse::<u8>() {
        return n
            .checked_sub(1)
            .and_then(Masa::from_index)
            .ok_or_else(|| anyhow!("masa number {n} outside 1-12"));
    }
    ALL_MASAS
        .into_iter()
        .find(|m| m.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| anyhow!("unknown masa: {s}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_snapshot(s: &PanchangSnapshot) {
    println!("Date:       {} ({})", s.date, s.vaar.name());
    println!("Sunrise:    {}", s.sunrise);
    println!("Sunset:     {}", s.sunset);
    if let Some(rise) = s.moonrise {
        println!("Moonrise:   {rise}");
    }
    if let Some(set) = s.moonset {
        println!("Moonset:    {set}");
    }
    let skipped = if s.tithi_skipped { " (skipped ahead)" } else { "" };
    println!(
        "Tithi:      {} {} ({} paksha), until {}{skipped}",
        s.tithi.name,
        s.tithi.tithi_in_paksha,
        s.paksha.name,
        s.tithi.end
    );
    for t in &s.day_tithis {
        println!("  {:<14} {} .. {}  {:?}", t.tithi.name, t.tithi.start, t.tithi.end, t.tag);
    }
    println!("Nakshatra:  {} pada {}, until {}", s.nakshatra.name, s.nakshatra.pada, s.nakshatra.end);
    println!("Yoga:       {}, until {}", s.yoga.name, s.yoga.end);
    println!("Karana:     {}, until {}", s.karana.name, s.karana.end);
    let leap = if s.masa.is_leap_month { "Adhika " } else { "" };
    println!(
        "Masa:       {leap}{} (purnimanta {}), {} .. {}",
        s.masa.name,
        s.masa.purnimanta_masa.name(),
        s.masa.start,
        s.masa.end
    );
    println!("Paksha:     {} .. {}", s.paksha.start, s.paksha.end);
    println!("Ritu:       {} ({} .. {})", s.ritu.name, s.ritu.start, s.ritu.end);
    println!("Ayana:      {} ({} .. {})", s.ayana.name, s.ayana.start, s.ayana.end);
    println!("Samvatsara: {}", s.samvatsara.name());
    println!("Sun:        {} {:.2} deg", s.sun_rashi.name, s.sun_rashi.degrees_in_rashi);
    println!("Moon:       {} {:.2} deg", s.moon_rashi.name, s.moon_rashi.degrees_in_rashi);
}

fn print_table(table: &TithiBoundaryTable) {
    let offset = table.offset_hours();
    for b in table.boundaries() {
        let leap = if b.is_leap_month { " (adhika)" } else { "" };
        println!(
            "{:>2} {:<14} {} .. {}  {}{leap}",
            b.tithi_index + 1,
            tithi_name(b.tithi_index).unwrap_or("?"),
            b.start(offset),
            b.end(offset),
            b.masa().map_or("?", Masa::name),
        );
    }
    let gaps = table.gaps();
    if !gaps.is_empty() {
        println!("{} gap(s) in the table", gaps.len());
    }
}

fn print_sankrantis(events: &[SankrantiEvent], offset_hours: f64) {
    for ev in events {
        println!("{:<10} {}", ev.rashi.name(), ev.time(offset_hours));
    }
}

fn print_chart(chart: &RashiChart) {
    for p in &chart.placements {
        println!("{:<8} {:<10} {:>6.2} deg", p.graha.name(), p.rashi.name(), p.degrees_in_rashi);
    }
    for g in &chart.omitted {
        println!("{:<8} (not available)", g.name());
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let file = load_file_config(cli.config.as_deref())?;
    let config = file.search;
    config.validate()?;
    let provider = AnalyticEphemeris::new(config.ayanamsha_system);

    match &cli.command {
        Commands::Snapshot { date } => {
            let location = resolve_location(&cli, file.location)?;
            let date = CivilDate::parse(date)?;
            let snapshot = panchang_for_day(&provider, date, &location, &config)?;
            if cli.json {
                print_json(&snapshot)?;
            } else {
                print_snapshot(&snapshot);
            }
        }

        Commands::Boundaries { year, out } => {
            let location = resolve_location(&cli, file.location)?;
            let table = compute_all_tithi_boundaries(&provider, *year, &location, &config)?;
            match out {
                Some(path) => {
                    save_table(&table, path)?;
                    info!(path = %path.display(), boundaries = table.len(), "table written");
                }
                None if cli.json => println!("{}", to_json(&table)?),
                None => print_table(&table),
            }
        }

        Commands::Sankranti { year } => {
            let location = resolve_location(&cli, file.location)?;
            let events = sankrantis_for_year(&provider, *year, &location, &config)?;
            if cli.json {
                print_json(&events)?;
            } else {
                print_sankrantis(&events, location.utc_offset_hours);
            }
        }

        Commands::RashiChart { date } => {
            let location = resolve_location(&cli, file.location)?;
            let t = parse_local_minute(date, location.utc_offset_hours)?;
            let chart = rashi_chart(&provider, t.to_jd_ut())?;
            if cli.json {
                print_json(&chart)?;
            } else {
                print_chart(&chart);
            }
        }

        Commands::TithiLookup { year, tithi, masa, leap } => {
            if !(1..=30).contains(tithi) {
                bail!("tithi must be 1-30, got {tithi}");
            }
            let masa = parse_masa(masa)?;
            let location = resolve_location(&cli, file.location)?;
            let table = compute_all_tithi_boundaries(&provider, *year, &location, &config)?;
            let hit = table
                .resolve_tithi_in_masa(tithi - 1, masa.index(), *year, *leap)
                .ok_or_else(|| anyhow!("tithi {tithi} of {} not found in {year}", masa.name()))?;
            if cli.json {
                print_json(hit)?;
            } else {
                let offset = location.utc_offset_hours;
                let adhika = if hit.is_leap_month { "Adhika " } else { "" };
                println!(
                    "{} in {adhika}{}: {} .. {}",
                    tithi_name(hit.tithi_index).unwrap_or("?"),
                    masa.name(),
                    hit.start(offset),
                    hit.end(offset)
                );
            }
        }

        Commands::LoadCache { file: path, year } => {
            let location = cache_location(&cli, file.location)?;
            let table = load_table(path, *year, &location)?;
            if cli.json {
                println!("{}", to_json(&table)?);
            } else {
                println!("{}: {} boundaries for {}", path.display(), table.len(), table.year);
                print_table(&table);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masa_by_name_or_number() {
        assert_eq!(parse_masa("pausha").unwrap(), Masa::Pausha);
        assert_eq!(parse_masa("1").unwrap(), Masa::Chaitra);
        assert_eq!(parse_masa("12").unwrap(), Masa::Phalguna);
        assert!(parse_masa("0").is_err());
        assert!(parse_masa("13").is_err());
        assert!(parse_masa("Sravana").is_err());
    }

    #[test]
    fn local_minute() {
        let t = parse_local_minute("2024-01-15T06:45", 5.5).unwrap();
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2024, 1, 15, 6, 45));
        assert_eq!(t.offset_hours, 5.5);
        assert!(parse_local_minute("2024-01-15", 5.5).is_err());
        assert!(parse_local_minute("2024-01-15T25:00", 5.5).is_err());
    }

    #[test]
    fn config_file_with_location() {
        let text = r#"
            scan_step_days = 0.1
            ayanamsha_system = "kp"

            [location]
            latitude_deg = 17.385
            longitude_deg = 78.4867
            utc_offset_hours = 5.5
        "#;
        let file: FileConfig = toml::from_str(text).unwrap();
        assert_eq!(file.search.scan_step_days, 0.1);
        assert_eq!(file.search.padding_days, 15.0);
        assert_eq!(file.search.ayanamsha_system, panchang_base::AyanamshaSystem::Kp);
        let loc = file.location.unwrap();
        assert_eq!(loc.elevation_m, 0.0);
    }

    #[test]
    fn flags_override_file_location() {
        let cli = Cli::parse_from([
            "panchang", "--lat", "-33.9", "--tz", "2", "snapshot", "--date", "2024-01-15",
        ]);
        let file = Location::new(17.0, 78.0, 500.0, 5.5);
        let loc = resolve_location(&cli, Some(file)).unwrap();
        assert_eq!(loc.latitude_deg, -33.9);
        assert_eq!(loc.longitude_deg, 78.0);
        assert_eq!(loc.utc_offset_hours, 2.0);
        assert_eq!(loc.elevation_m, 500.0);
    }

    #[test]
    fn missing_location_is_an_error() {
        let cli = Cli::parse_from(["panchang", "sankranti", "--year", "2024"]);
        assert!(resolve_location(&cli, None).is_err());
    }

    #[test]
    fn cache_location_defaults_only_when_absent() {
        let cli = Cli::parse_from(["panchang", "load-cache", "--file", "cache.json"]);
        let loc = cache_location(&cli, None).unwrap();
        assert_eq!((loc.latitude_deg, loc.utc_offset_hours), (0.0, 0.0));

        let cli = Cli::parse_from([
            "panchang", "--lat", "95", "--lon", "0", "--tz", "0", "load-cache", "--file", "cache.json",
        ]);
        assert!(cache_location(&cli, None).is_err());

        let cli = Cli::parse_from(["panchang", "--tz", "5.5", "load-cache", "--file", "cache.json"]);
        assert!(cache_location(&cli, None).is_err());

        let bad_file = Location::new(0.0, 0.0, 0.0, 20.0);
        let cli = Cli::parse_from(["panchang", "load-cache", "--file", "cache.json"]);
        assert!(cache_location(&cli, Some(bad_file)).is_err());
    }
}
