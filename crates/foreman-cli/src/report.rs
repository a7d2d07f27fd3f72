//! Host row rendering for `list hosts`

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use colored::Colorize;

use foreman_api::responses::Host;

/// Wire format of `last_report`
const LAST_REPORT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Staleness band of a host's last report.
///
/// Band bounds are inclusive: a report exactly one hour old is still fresh,
/// exactly two hours old still stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    Fresh,
    Stale,
    Critical,
}

impl Staleness {
    #[must_use]
    pub fn classify(age_seconds: i64) -> Self {
        if age_seconds <= 3600 {
            Staleness::Fresh
        } else if age_seconds <= 7200 {
            Staleness::Stale
        } else {
            Staleness::Critical
        }
    }

    fn paint(self, text: &str) -> String {
        match self {
            Staleness::Fresh => text.green().to_string(),
            Staleness::Stale => text.yellow().to_string(),
            Staleness::Critical => text.red().to_string(),
        }
    }
}

/// Parse a `last_report` timestamp as UTC
pub fn parse_last_report(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    Ok(NaiveDateTime::parse_from_str(raw, LAST_REPORT_FORMAT)?.and_utc())
}

/// Age of the last report as colorized human-readable text.
///
/// A missing or unparseable `last_report` renders as plain `unknown` rather
/// than aborting the whole listing; a report from the future clamps to zero.
fn render_age(host: &Host, now: DateTime<Utc>) -> String {
    let Some(raw) = host.last_report.as_deref() else {
        return "unknown".to_string();
    };
    match parse_last_report(raw) {
        Ok(last_report) => {
            let age_seconds = (now - last_report).num_seconds().max(0);
            let age = Duration::from_secs(u64::try_from(age_seconds).unwrap_or(0));
            Staleness::classify(age_seconds).paint(&humantime::format_duration(age).to_string())
        }
        Err(err) => {
            tracing::warn!(
                host = host.name.as_deref().unwrap_or("-"),
                %err,
                "unparseable last_report"
            );
            "unknown".to_string()
        }
    }
}

/// One fixed-width row: name, IP, colorized report age
#[must_use]
pub fn render_row(host: &Host, now: DateTime<Utc>) -> String {
    format!(
        "{:<40} {:<15} {:<10}",
        host.name.as_deref().unwrap_or("-"),
        host.ip.as_deref().unwrap_or("-"),
        render_age(host, now),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(name: &str, ip: &str, last_report: Option<&str>) -> Host {
        Host {
            name: Some(name.to_string()),
            ip: Some(ip.to_string()),
            last_report: last_report.map(str::to_string),
            ..Host::default()
        }
    }

    #[test]
    fn bands_are_inclusive_of_their_lower_bound() {
        assert_eq!(Staleness::classify(0), Staleness::Fresh);
        assert_eq!(Staleness::classify(3599), Staleness::Fresh);
        assert_eq!(Staleness::classify(3600), Staleness::Fresh);
        assert_eq!(Staleness::classify(3601), Staleness::Stale);
        assert_eq!(Staleness::classify(7200), Staleness::Stale);
        assert_eq!(Staleness::classify(7201), Staleness::Critical);
    }

    #[test]
    fn parses_wire_timestamps_as_utc() {
        let ts = parse_last_report("2017-04-01T12:30:45Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2017-04-01T12:30:45+00:00");
        assert!(parse_last_report("2017-04-01 12:30:45").is_err());
    }

    #[test]
    fn renders_fixed_width_columns() {
        colored::control::set_override(false);
        let now = parse_last_report("2017-04-01T13:00:00Z").unwrap();
        let row = render_row(
            &host("web01.example.com", "10.1.2.3", Some("2017-04-01T12:30:00Z")),
            now,
        );

        assert!(row.starts_with("web01.example.com"));
        assert_eq!(&row[41..49], "10.1.2.3");
        assert!(row.ends_with("30m       "));
    }

    #[test]
    fn missing_fields_render_as_placeholders() {
        colored::control::set_override(false);
        let now = parse_last_report("2017-04-01T13:00:00Z").unwrap();
        let bare = Host::default();
        let row = render_row(&bare, now);

        assert!(row.starts_with('-'));
        assert!(row.contains("unknown"));
    }

    #[test]
    fn malformed_report_is_flagged_not_fatal() {
        colored::control::set_override(false);
        let now = parse_last_report("2017-04-01T13:00:00Z").unwrap();
        let row = render_row(&host("web01", "10.1.2.3", Some("yesterday")), now);
        assert!(row.contains("unknown"));
    }

    #[test]
    fn future_reports_clamp_to_zero_age() {
        colored::control::set_override(false);
        let now = parse_last_report("2017-04-01T12:00:00Z").unwrap();
        let row = render_row(
            &host("web01", "10.1.2.3", Some("2017-04-01T12:30:00Z")),
            now,
        );
        assert!(row.contains("0s"));
    }
}
