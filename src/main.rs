//! tlahuac-flood entrypoint: renders the flood dashboard once or on an interval,
//! lists map markers, or accepts a citizen incident report.

use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tlahuac_flood::{
    config::MonitorConfig,
    dashboard::{self, write_text, RiskSource, StaticSnapshot},
    logging::StructuredLogger,
    map::{unmatched_zones, MapView},
    output::write_json_line,
    report::{self, IncidentReport},
    risk::{RiskEngine, ZoneRiskTable},
    weather::OpenMeteoClient,
};
use tracing::{debug, info, warn};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "tlahuac-flood", version, about = "Tláhuac flood monitoring dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render zone risk cards, summary and map markers
    Dashboard(DashboardArgs),
    /// List map markers
    Markers {
        #[arg(long)]
        json: bool,
    },
    /// Submit a citizen incident report (echoed back, not stored)
    Report(ReportArgs),
}

#[derive(Args, Default)]
struct DashboardArgs {
    /// Use the fixed snapshot instead of live rainfall
    #[arg(long = "static")]
    use_static: bool,
    /// One JSON object per render instead of text
    #[arg(long)]
    json: bool,
    /// Re-render every refresh_interval_secs until Ctrl+C
    #[arg(long)]
    watch: bool,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    description: String,
    /// Photo/video reference
    #[arg(long)]
    media: Option<String>,
    #[arg(long)]
    json: bool,
}

static STOP: AtomicBool = AtomicBool::new(false);

fn render_once(
    args: &DashboardArgs,
    engine: &RiskEngine,
    map: &MapView,
    client: Option<&OpenMeteoClient>,
    out: &mut impl Write,
) -> Result<(), BoxError> {
    let source = match client {
        Some(c) if !args.use_static => RiskSource::Live(c),
        _ => RiskSource::Static(StaticSnapshot::default()),
    };
    let view = dashboard::render(&source, engine, map);
    if args.json {
        write_json_line(&view, out)?;
    } else {
        write_text(&view, out)?;
    }
    out.flush()?;
    Ok(())
}

fn run_dashboard(args: DashboardArgs, config: &MonitorConfig) -> Result<(), BoxError> {
    let table = ZoneRiskTable::new(config.zones.clone()).unwrap_or_default();
    let map = MapView::from_config(&config.map);
    let missing = unmatched_zones(&table, &map);
    if !missing.is_empty() {
        debug!(zones = ?missing, "risk zones without a map marker");
    }
    let engine = RiskEngine::new(config.risk.clone(), table);

    let client = if args.use_static {
        None
    } else {
        Some(OpenMeteoClient::new(config.weather.clone())?)
    };

    let stdout = std::io::stdout();
    let interval_secs = config.refresh_interval_secs;
    if !args.watch || interval_secs == 0 {
        if args.watch {
            warn!("refresh_interval_secs is 0; rendering once");
        }
        return render_once(&args, &engine, &map, client.as_ref(), &mut stdout.lock());
    }

    info!(interval_secs, "watch mode (Ctrl+C to stop)");
    let _ = ctrlc::set_handler(|| {
        STOP.store(true, Ordering::Relaxed);
    });
    let mut cycle: u64 = 0;
    while !STOP.load(Ordering::Relaxed) {
        cycle += 1;
        if let Err(e) = render_once(&args, &engine, &map, client.as_ref(), &mut stdout.lock()) {
            warn!(cycle, error = %e, "render failed");
        }
        for _ in 0..interval_secs {
            if STOP.load(Ordering::Relaxed) {
                break;
            }
            std::thread::sleep(Duration::from_secs(1));
        }
    }
    info!("tlahuac-flood stopping");
    Ok(())
}

fn run_markers(json: bool, config: &MonitorConfig) -> Result<(), BoxError> {
    let map = MapView::from_config(&config.map);
    let mut out = std::io::stdout().lock();
    if json {
        write_json_line(&map, &mut out)?;
    } else {
        for m in &map.markers {
            writeln!(out, "{}\t{:.3}\t{:.3}", m.label, m.lat, m.lon)?;
        }
    }
    Ok(())
}

fn run_report(args: ReportArgs) -> Result<(), BoxError> {
    let receipt = report::submit(IncidentReport {
        name: args.name,
        address: args.address,
        description: args.description,
        media: args.media,
    });
    let mut out = std::io::stdout().lock();
    if args.json {
        write_json_line(&receipt, &mut out)?;
    } else {
        receipt.write_text(&mut out)?;
    }
    Ok(())
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();

    let config_path = std::env::var("TLAHUAC_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"));
    let loaded = MonitorConfig::try_load(&config_path);
    let config = match &loaded {
        Ok(c) => c.clone(),
        Err(_) => MonitorConfig::default(),
    };

    StructuredLogger::init(config.log.json, &config.log.level);
    if let Err(e) = &loaded {
        warn!(error = %e, "config ignored; using defaults");
    }
    debug!(path = %config_path.display(), "configuration loaded");

    match cli.command {
        None => run_dashboard(DashboardArgs::default(), &config),
        Some(Command::Dashboard(args)) => run_dashboard(args, &config),
        Some(Command::Markers { json }) => run_markers(json, &config),
        Some(Command::Report(args)) => run_report(args),
    }
}
