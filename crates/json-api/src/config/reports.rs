//! Reports Config

use clap::Args;
use jiff::tz::TimeZone;

/// Sales report settings.
#[derive(Debug, Args)]
pub struct ReportsConfig {
    /// IANA time zone report dates are read in; defaults to the system zone
    #[arg(long, env = "REPORT_TIME_ZONE")]
    pub report_time_zone: Option<String>,
}

impl ReportsConfig {
    /// Resolve the configured zone.
    ///
    /// # Errors
    ///
    /// Returns an error when the zone name is unknown.
    pub fn time_zone(&self) -> Result<TimeZone, jiff::Error> {
        match self.report_time_zone.as_deref() {
            Some(name) => TimeZone::get(name),
            None => Ok(TimeZone::system()),
        }
    }
}
