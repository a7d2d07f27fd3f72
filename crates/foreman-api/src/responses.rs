//! Response types for the Foreman API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of a paged listing endpoint.
///
/// Foreman repeats the listing-wide `total` and `per_page` on every page;
/// the client reads them from the first page only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub total: u64,
    pub per_page: u64,
    pub results: Vec<T>,
}

/// A managed host record.
///
/// Only the fields the client interprets are modeled. Everything else the
/// server sends lands in `extra`, so no data is lost on round-trips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Host {
    pub name: Option<String>,
    pub ip: Option<String>,
    /// Timestamp of the last report check-in, `YYYY-MM-DDTHH:MM:SSZ`, UTC
    pub last_report: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_host_page() {
        let body = r#"{
            "total": 2,
            "subtotal": 2,
            "page": 1,
            "per_page": 20,
            "results": [
                {"name": "web01.example.com", "ip": "10.1.2.3",
                 "last_report": "2017-04-01T12:00:00Z", "operatingsystem_id": 4},
                {"name": "db01.example.com", "ip": null, "last_report": null}
            ]
        }"#;

        let page: PageResponse<Host> = serde_json::from_str(body).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.per_page, 20);
        assert_eq!(page.results.len(), 2);

        let web = &page.results[0];
        assert_eq!(web.name.as_deref(), Some("web01.example.com"));
        assert_eq!(web.ip.as_deref(), Some("10.1.2.3"));
        assert_eq!(web.last_report.as_deref(), Some("2017-04-01T12:00:00Z"));
        assert_eq!(web.extra["operatingsystem_id"], 4);

        let db = &page.results[1];
        assert_eq!(db.ip, None);
        assert_eq!(db.last_report, None);
    }

    #[test]
    fn serializes_power_request_body() {
        let body = crate::requests::PowerRequest::new("start");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"power_action":"start"}"#
        );
    }
}
