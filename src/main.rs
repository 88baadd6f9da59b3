use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use salary_insights::utils::logging::{log_warning, print_filter_options, print_report_summary};
use salary_insights::{Dashboard, DashboardConfig, DashboardVariant, FilterSelection};

#[derive(Parser)]
#[command(name = "salary-insights")]
#[command(about = "Filter a salary dataset and compute the dashboard aggregates")]
struct Args {
    /// Salary CSV file (overrides the configured data path)
    data: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// View preset (essential, standard, complete)
    #[arg(long)]
    variant: Option<DashboardVariant>,

    /// Keep only these years (repeatable, default: all)
    #[arg(long = "year")]
    years: Vec<i32>,

    /// Keep only these seniority levels (repeatable, default: all)
    #[arg(long)]
    seniority: Vec<String>,

    /// Keep only these contract types (repeatable, default: all)
    #[arg(long)]
    contract: Vec<String>,

    /// Keep only these company sizes (repeatable, default: all)
    #[arg(long)]
    company_size: Vec<String>,

    /// Write the filtered rows to this CSV file
    #[arg(short = 'o', long)]
    export: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Print a short human-readable summary instead of JSON
    #[arg(long)]
    summary: bool,

    /// List the available filter values and exit
    #[arg(long)]
    options: bool,
}

impl Args {
    /// Narrow the select-all default with the dimensions given on the command line
    fn selection(&self, all: FilterSelection) -> FilterSelection {
        let mut selection = all;
        if !self.years.is_empty() {
            selection = selection.with_years(self.years.iter().copied());
        }
        if !self.seniority.is_empty() {
            selection = selection.with_seniority(self.seniority.iter().cloned());
        }
        if !self.contract.is_empty() {
            selection = selection.with_contract(self.contract.iter().cloned());
        }
        if !self.company_size.is_empty() {
            selection = selection.with_company_size(self.company_size.iter().cloned());
        }
        selection
    }
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DashboardConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(data) = &args.data {
        config.data_path.clone_from(data);
    }
    if let Some(variant) = args.variant {
        config.variant = variant;
        config.views = None;
    }
    info!("{config}");

    let start = Instant::now();
    let data_path = config.data_path.clone();
    let mut dashboard = Dashboard::load(config)
        .with_context(|| format!("Failed to load salary dataset {}", data_path.display()))?;

    if args.options {
        print_filter_options(&dashboard.filter_options());
        return Ok(());
    }

    let selection = args.selection(dashboard.default_selection());
    let report = dashboard.report(&selection);
    if report.is_empty() {
        log_warning("No records match the selection", None);
    }

    if let Some(path) = &args.export {
        let rows = dashboard
            .export_filtered(&selection, path)
            .with_context(|| format!("Failed to export filtered rows to {}", path.display()))?;
        info!("Wrote {rows} filtered rows");
    }

    if args.summary {
        print_report_summary(&report);
    } else {
        let json = if args.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .context("Failed to serialize dashboard report")?;
        println!("{json}");
    }

    info!("Finished in {:?}", start.elapsed());
    Ok(())
}
