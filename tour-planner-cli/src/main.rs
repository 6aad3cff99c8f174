mod loader;
mod reports;
mod util;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use loader::FileCatalogLoader;
use tour_planner::{
    BundledCatalog, InputError, Itinerary, PlanRequest, PlanResult, PlanningEngine, PlanningError,
    TripDates,
};
use util::parse_interests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable itinerary with colors
    Console,
    /// Machine-readable itinerary
    Json,
    /// Markdown tables
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "tour-planner", version)]
#[command(
    about = "Plan a multi-country tour from your interests, travel dates and budget"
)]
struct Args {
    /// Country dataset (JSON keyed by country name); the bundled dataset is used when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Interests to match (comma-separated)
    #[arg(long, default_value = "")]
    interests: String,

    /// Number of countries to visit
    #[arg(long, default_value_t = 3)]
    countries: usize,

    /// Home country the trip starts and ends in
    #[arg(long, default_value = "")]
    home: String,

    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Total budget in USD
    #[arg(long, default_value_t = 0.0)]
    budget: f64,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the route as GeoJSON to this path
    #[arg(long)]
    map: Option<PathBuf>,

    /// List every interest known to the dataset and exit
    #[arg(long)]
    list_interests: bool,

    /// List every country in the dataset and exit
    #[arg(long)]
    list_countries: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_PLANNING_FAILED: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 2;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let engine = load_engine(&args)?;

    if maybe_list(&args, &engine)? {
        return Ok(ExitCode::SUCCESS);
    }

    let request = match build_request(&args) {
        Ok(request) => request,
        Err(err) => {
            report_failure(&err);
            return Ok(ExitCode::from(exit_code_for(&err)));
        }
    };

    let result = match engine.plan_request(&request) {
        Ok(result) => result,
        Err(err) => {
            report_failure(&err);
            return Ok(ExitCode::from(exit_code_for(&err)));
        }
    };
    log::info!(
        "planned {} stops for {}",
        result.route.interior().len(),
        util::format_money(result.total_cost)
    );

    let itinerary = engine.itinerary(&request, &result);
    write_report(&args, &itinerary)?;

    if let Some(path) = &args.map {
        write_map(&engine, &result, path)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_engine(args: &Args) -> Result<PlanningEngine> {
    match &args.catalog {
        Some(path) => PlanningEngine::load(&FileCatalogLoader::new(path.clone()))
            .with_context(|| format!("failed to load country data from {}", path.display())),
        None => {
            PlanningEngine::load(&BundledCatalog).context("failed to load bundled country data")
        }
    }
}

fn maybe_list(args: &Args, engine: &PlanningEngine) -> Result<bool> {
    if !args.list_interests && !args.list_countries {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    if args.list_interests {
        writeln!(output_target.writer(), "Available interests:")?;
        for interest in engine.catalog().all_interests() {
            writeln!(output_target.writer(), "  {interest}")?;
        }
    }
    if args.list_countries {
        writeln!(output_target.writer(), "Available countries:")?;
        for name in engine.catalog().country_names() {
            writeln!(output_target.writer(), "  {name}")?;
        }
    }
    output_target.flush_inner()?;
    Ok(true)
}

/// Turn raw arguments into a request; field checks against the catalog happen in the engine.
fn build_request(args: &Args) -> Result<PlanRequest, PlanningError> {
    let (Some(start), Some(end)) = (args.start, args.end) else {
        return Err(InputError::MissingTripDates.into());
    };
    let dates = TripDates::new(start, end)?;
    Ok(PlanRequest {
        interests: parse_interests(&args.interests),
        country_count: args.countries,
        home: args.home.trim().to_string(),
        dates,
        budget: args.budget,
    })
}

const fn exit_code_for(err: &PlanningError) -> u8 {
    match err {
        PlanningError::InvalidInput(_) => EXIT_INVALID_INPUT,
        PlanningError::NoMatchingCountries | PlanningError::BudgetExceeded { .. } => {
            EXIT_PLANNING_FAILED
        }
    }
}

fn report_failure(err: &PlanningError) {
    let title = match err {
        PlanningError::InvalidInput(_) => "Input Error",
        PlanningError::NoMatchingCountries => "No Matches",
        PlanningError::BudgetExceeded { .. } => "Budget Exceeded",
    };
    eprintln!("❌ {}: {err}", title.red().bold());
    if let PlanningError::BudgetExceeded {
        estimated_cost,
        budget,
    } = err
    {
        eprintln!(
            "   The estimated cost for this trip is {}, which exceeds your budget of {}.",
            util::format_money(*estimated_cost),
            util::format_money(*budget)
        );
    }
    let suggestions = err.suggestions();
    if !suggestions.is_empty() {
        eprintln!("   Suggestions:");
        for suggestion in suggestions {
            eprintln!("     • {suggestion}");
        }
    }
}

fn write_report(args: &Args, itinerary: &Itinerary) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Json => reports::generate_json_report(&mut output_target, itinerary)?,
        ReportFormat::Markdown => {
            reports::generate_markdown_report(&mut output_target, itinerary)?;
        }
        ReportFormat::Console => reports::generate_console_report(&mut output_target, itinerary)?,
    }
    output_target.flush_inner()?;
    Ok(())
}

fn write_map(
    engine: &PlanningEngine,
    result: &PlanResult,
    path: &Path,
) -> Result<()> {
    let Some(map) = engine.route_map(result) else {
        log::warn!("route has no locatable stops; skipping map");
        return Ok(());
    };
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &map.to_geojson())
        .with_context(|| format!("failed to write map to {}", path.display()))?;
    writer.flush()?;
    log::info!("wrote route map to {}", path.display());
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            catalog: None,
            interests: "food,art".to_string(),
            countries: 2,
            home: "France".to_string(),
            start: NaiveDate::from_ymd_opt(2026, 9, 1),
            end: NaiveDate::from_ymd_opt(2026, 9, 10),
            budget: 10_000.0,
            report: ReportFormat::Json,
            verbose: false,
            output: None,
            map: None,
            list_interests: false,
            list_countries: false,
        }
    }

    #[test]
    fn build_request_parses_fields() {
        let request = build_request(&base_args()).unwrap();
        assert_eq!(request.total_days(), 10);
        assert!(request.interests.contains("food"));
        assert_eq!(request.home, "France");
    }

    #[test]
    fn build_request_requires_ordered_dates() {
        let args = Args {
            end: NaiveDate::from_ymd_opt(2026, 8, 1),
            ..base_args()
        };
        let err = build_request(&args).unwrap_err();
        assert!(matches!(
            err,
            PlanningError::InvalidInput(InputError::EndNotAfterStart { .. })
        ));
        assert_eq!(exit_code_for(&err), EXIT_INVALID_INPUT);

        let args = Args {
            start: None,
            ..base_args()
        };
        assert_eq!(
            build_request(&args).unwrap_err(),
            PlanningError::InvalidInput(InputError::MissingTripDates)
        );
    }

    #[test]
    fn planning_failures_map_to_exit_one() {
        assert_eq!(
            exit_code_for(&PlanningError::NoMatchingCountries),
            EXIT_PLANNING_FAILED
        );
        assert_eq!(
            exit_code_for(&PlanningError::BudgetExceeded {
                estimated_cost: 2.0,
                budget: 1.0
            }),
            EXIT_PLANNING_FAILED
        );
    }

    #[test]
    fn maybe_list_writes_interests() {
        let temp = std::env::temp_dir().join(format!(
            "tour-planner-interests-{}.txt",
            std::process::id()
        ));
        let args = Args {
            list_interests: true,
            output: Some(temp.clone()),
            ..base_args()
        };
        let engine = load_engine(&args).unwrap();
        assert!(maybe_list(&args, &engine).unwrap());
        let content = std::fs::read_to_string(&temp).unwrap();
        std::fs::remove_file(&temp).unwrap();
        assert!(content.contains("Available interests"));
        assert!(content.contains("  wine"));
    }

    #[test]
    fn write_report_emits_json_itinerary() {
        let temp = std::env::temp_dir().join(format!(
            "tour-planner-report-{}.json",
            std::process::id()
        ));
        let args = Args {
            output: Some(temp.clone()),
            ..base_args()
        };
        let engine = load_engine(&args).unwrap();
        let request = build_request(&args).unwrap();
        let result = engine.plan_request(&request).unwrap();
        write_report(&args, &engine.itinerary(&request, &result)).unwrap();
        let content = std::fs::read_to_string(&temp).unwrap();
        std::fs::remove_file(&temp).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["home"], "France");
        assert_eq!(value["route"].as_array().unwrap().len(), 4);
    }
}
