use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use cholera_insights::{DashboardModel, DateRange, Granularity, WarningConfig};
use cholera_insights::{buckets, ingest, range, storage};
use num_format::{Locale, ToFormattedString};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cholera-insights",
    version,
    about = "Aggregate & summarize cholera situation-report data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a dataset, apply a date range, and print derived insights.
    Report(ReportArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(ValueEnum, Clone, Debug)]
enum Period {
    Month,
    Year,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Path to the situation-report CSV.
    #[arg(short, long)]
    data: PathBuf,
    /// Window start (YYYY-MM-DD). Defaults to the dataset's first report.
    #[arg(long, default_value = "")]
    start: String,
    /// Window end (YYYY-MM-DD). Defaults to the dataset's last report.
    #[arg(long, default_value = "")]
    end: String,
    /// Bucket granularity for the period table.
    #[arg(long, value_enum, default_value_t = Period::Month)]
    granularity: Period,
    /// Print the period-bucket table.
    #[arg(long, default_value_t = false)]
    buckets: bool,
    /// Save output to file: filtered rows as CSV, the full model as JSON.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn fmt_count(n: f64) -> String {
    (n.max(0.0).round() as u64).to_formatted_string(&Locale::en)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Report(args) => cmd_report(args),
    }
}

fn cmd_report(args: ReportArgs) -> Result<()> {
    let dataset = ingest::load_reports(&args.data)?;
    eprintln!(
        "Loaded {} reports ({} skipped without a valid date)",
        dataset.reports.len().to_formatted_string(&Locale::en),
        dataset.skipped_rows.to_formatted_string(&Locale::en)
    );

    let window = DateRange::effective(&args.start, &args.end, dataset.bounds());
    let rows = range::filter_by_range(&dataset.reports, &window);
    eprintln!(
        "Window {} to {}: {} reports",
        window.start,
        window.end,
        rows.len().to_formatted_string(&Locale::en)
    );

    let model = DashboardModel::compute(&rows, &WarningConfig::default());

    println!(
        "reports={} suspected={} confirmed={} deaths={} avgCFR={:.2}% positivity={:.2}%",
        model.summary.total_reports.to_formatted_string(&Locale::en),
        fmt_count(model.summary.total_suspected),
        fmt_count(model.summary.total_confirmed),
        fmt_count(model.summary.total_deaths),
        model.summary.avg_cfr,
        model.summary.positivity_rate
    );
    for line in &model.insights {
        println!("- {line}");
    }

    if args.buckets {
        let granularity = match args.granularity {
            Period::Month => Granularity::Month,
            Period::Year => Granularity::Year,
        };
        for b in buckets::bucket_by_period(&rows, granularity) {
            println!(
                "{:<10} suspected={:<8} confirmed={:<8} positivity={:.1}% cfr={:.2}%",
                b.label,
                fmt_count(b.suspected),
                fmt_count(b.confirmed),
                b.positivity,
                b.cfr
            );
        }
    }

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("json"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_reports_csv(&rows, path)?,
            "json" => storage::save_json(&model, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved output to {}", path.display());
    }

    Ok(())
}
