use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Layouts accepted for dates typed on the command line, tried in order.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%B %d, %Y", "%d %b %Y"];

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            format!(
                "failed to parse '{raw}' as a date; use YYYY-MM-DD, DD-MM-YYYY, DD/MM/YYYY, \"January 2, 2006\" or \"2 Jan 2006\""
            )
        })
}
