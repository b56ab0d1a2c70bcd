use clap::Args;
use jiff::{civil::Date, tz::TimeZone};
use kasir_app::{
    database::{self, DEFAULT_MAX_CONNECTIONS, Db},
    domain::reports::{PgReportsService, ReportsService, models::ReportPeriod},
};

#[derive(Debug, Args)]
pub(crate) struct SalesArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// First day of the report (YYYY-MM-DD); defaults to today
    #[arg(long)]
    start_date: Option<Date>,

    /// Last day of the report, inclusive (YYYY-MM-DD); defaults to the start date
    #[arg(long)]
    end_date: Option<Date>,

    /// IANA time zone the dates are read in; defaults to the system zone
    #[arg(long, env = "REPORT_TIME_ZONE")]
    time_zone: Option<String>,
}

pub(crate) async fn run(args: SalesArgs) -> Result<(), String> {
    let tz = match args.time_zone.as_deref() {
        Some(name) => TimeZone::get(name)
            .map_err(|error| format!("unknown time zone {name}: {error}"))?,
        None => TimeZone::system(),
    };

    let period = match (args.start_date, args.end_date) {
        (None, None) => ReportPeriod::today(&tz),
        (Some(start), end) => ReportPeriod::from_dates(start, end.unwrap_or(start), &tz),
        (None, Some(_)) => return Err("--end-date requires --start-date".to_string()),
    }
    .map_err(|error| format!("invalid report period: {error}"))?;

    let pool = database::connect(&args.database_url, DEFAULT_MAX_CONNECTIONS)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let report = PgReportsService::new(Db::new(pool))
        .sales_report(period)
        .await
        .map_err(|error| format!("failed to build sales report: {error}"))?;

    println!("period_start: {}", period.start);
    println!("period_end: {}", period.end);
    println!("total_revenue: {}", report.total_revenue);
    println!("total_transactions: {}", report.total_transactions);
    println!("best_seller: {}", report.best_seller.name);
    println!("best_seller_quantity: {}", report.best_seller.quantity);

    Ok(())
}
