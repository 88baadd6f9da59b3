//! Console output utilities
//!
//! Human-readable summaries printed by the command line tool. The library
//! itself never prints; these are only called from the binary.

use crate::dashboard::DashboardReport;
use crate::filter::FilterOptions;

fn joined<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the values available for each filter dimension
pub fn print_filter_options(options: &FilterOptions) {
    println!("Total records: {}", options.total_records);
    println!("Filter options:");
    println!("  - Years: {}", joined(&options.years));
    println!("  - Seniority: {}", joined(&options.seniority));
    println!("  - Contract: {}", joined(&options.contract));
    println!("  - Company size: {}", joined(&options.company_size));
}

/// Print the headline figures of a report
pub fn print_report_summary(report: &DashboardReport) {
    println!(
        "Selected {} of {} records",
        report.filtered_records, report.total_records
    );
    if report.is_empty() {
        println!("No records match the current selection");
        return;
    }

    if let Some(kpis) = &report.kpis {
        println!("Mean salary: ${:.0}", kpis.mean);
        println!("Median salary: ${:.0}", kpis.median);
        println!("Max salary: ${:.0}", kpis.max);
        println!("Most frequent role: {}", kpis.top_role);
    }
    if let Some(trend) = &report.yearly_trend {
        if let (Some(first), Some(last)) = (trend.first_year, trend.last_year) {
            println!("Growth {first}-{last}: {:.1}%", trend.growth_pct);
        }
    }
    if let Some(top) = report
        .countries
        .as_ref()
        .and_then(|view| view.top_country.as_ref())
    {
        println!("Best paying country: {} (${:.0})", top.iso3, top.mean);
    }
}
