//! # Guest Services
//!
//! Service categories, the request form, request construction, and the
//! display ordering of recent requests.

use chrono::{DateTime, Local, NaiveDateTime};

use crate::api::{ApiError, RequestStatus, ServiceRequest};
use crate::core::catalog::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    Room,
    Housekeeping,
    Concierge,
    Maintenance,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Room,
        ServiceCategory::Housekeeping,
        ServiceCategory::Concierge,
        ServiceCategory::Maintenance,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Room => "Room Service",
            Self::Housekeeping => "Housekeeping",
            Self::Concierge => "Concierge",
            Self::Maintenance => "Maintenance",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Self::Room => "Food & beverages",
            Self::Housekeeping => "Room cleaning & supplies",
            Self::Concierge => "Information & assistance",
            Self::Maintenance => "Repairs & technical issues",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Room => Icon::Feather("coffee"),
            Self::Housekeeping => Icon::Feather("wind"),
            Self::Concierge => Icon::Feather("bell"),
            Self::Maintenance => Icon::Feather("tool"),
        }
    }

    /// Request types offered in the form for this category.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::Room => &["Breakfast", "Lunch", "Dinner", "Beverages"],
            Self::Housekeeping => &["Room cleaning", "Extra towels", "Bed linens", "Toiletries"],
            Self::Concierge => &[
                "Restaurant reservations",
                "Transportation",
                "Local attractions",
                "General information",
            ],
            Self::Maintenance => &["Air conditioning", "Plumbing", "Electrical", "TV/Internet"],
        }
    }
}

/// Text the guest has entered into the request form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestForm {
    pub request_type: String,
    pub request_details: String,
    pub preferred_time: String,
}

impl RequestForm {
    pub fn clear(&mut self) {
        self.request_type.clear();
        self.request_details.clear();
        self.preferred_time.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.request_type.is_empty()
            && self.request_details.is_empty()
            && self.preferred_time.is_empty()
    }

    /// Step through the category's request types. An empty selection steps
    /// to the first (or last, going backwards) option.
    pub fn cycle_request_type(&mut self, category: ServiceCategory, forward: bool) {
        let options = category.options();
        if options.is_empty() {
            return;
        }
        let current = options.iter().position(|o| *o == self.request_type);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
        };
        self.request_type = options[next].to_string();
    }
}

/// Format used for the `time` field of submitted requests ("1/2/2024, 10:00:00 AM").
pub const SUBMITTED_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Build the record sent to the server. Status is always pending.
pub fn build_request(
    category: ServiceCategory,
    form: &RequestForm,
    now: DateTime<Local>,
) -> ServiceRequest {
    let title = category.title();
    let description = if form.request_details.is_empty() {
        format!("Request for {} service", title.to_lowercase())
    } else {
        form.request_details.clone()
    };
    ServiceRequest {
        id: format!("req-{}", now.timestamp_millis()),
        title: title.to_string(),
        description,
        status: RequestStatus::Pending,
        time: now.format(SUBMITTED_TIME_FORMAT).to_string(),
    }
}

/// Placeholder list shown when the services fetch fails.
pub fn fallback_requests(error: &ApiError) -> Vec<ServiceRequest> {
    let (title, description) = match error {
        ApiError::Status { .. } => ("No requests available", "Try again later"),
        ApiError::Network(_) | ApiError::Decode(_) => {
            ("Connection error", "Check your network connection")
        }
    };
    vec![ServiceRequest {
        id: "default-1".to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status: RequestStatus::Pending,
        time: "Now".to_string(),
    }]
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
];

/// Parse a request timestamp as local wall-clock time.
pub fn parse_request_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Local).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Newest first. Requests whose time can't be parsed keep their relative
/// order and go after every dated request.
pub fn sort_recent(requests: &[ServiceRequest]) -> Vec<ServiceRequest> {
    let mut sorted = requests.to_vec();
    // Option orders None below Some, so descending puts unparsed last.
    sorted.sort_by_cached_key(|r| std::cmp::Reverse(parse_request_time(&r.time)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(id: &str, time: &str) -> ServiceRequest {
        ServiceRequest {
            id: id.to_string(),
            title: "Concierge".to_string(),
            description: "d".to_string(),
            status: RequestStatus::Completed,
            time: time.to_string(),
        }
    }

    #[test]
    fn test_sort_recent_later_date_first() {
        let requests = vec![
            request("old", "2024-01-01 10:00"),
            request("new", "2024-01-02 10:00"),
        ];
        let sorted = sort_recent(&requests);
        assert_eq!(sorted[0].id, "new");
        assert_eq!(sorted[1].id, "old");
        // Input untouched
        assert_eq!(requests[0].id, "old");
    }

    #[test]
    fn test_sort_recent_unparseable_last_in_original_order() {
        let requests = vec![
            request("x", "Now"),
            request("a", "2024-01-01 10:00"),
            request("y", "later"),
            request("b", "2024-03-01T09:00:00Z"),
        ];
        let ids: Vec<_> = sort_recent(&requests).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a", "x", "y"]);
    }

    #[test]
    fn test_parse_submitted_format_round_trips() {
        let now = Local.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
        let formatted = now.format(SUBMITTED_TIME_FORMAT).to_string();
        assert_eq!(formatted, "1/2/2024, 3:04:05 PM");
        assert_eq!(parse_request_time(&formatted), Some(now.naive_local()));
    }

    #[test]
    fn test_build_request_default_description() {
        let now = Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let req = build_request(ServiceCategory::Room, &RequestForm::default(), now);
        assert_eq!(req.id, format!("req-{}", now.timestamp_millis()));
        assert_eq!(req.title, "Room Service");
        assert_eq!(req.description, "Request for room service service");
        assert_eq!(req.status, RequestStatus::Pending);
    }

    #[test]
    fn test_build_request_uses_details() {
        let form = RequestForm {
            request_type: "Extra towels".to_string(),
            request_details: "Two bath towels please".to_string(),
            preferred_time: "18:00".to_string(),
        };
        let req = build_request(ServiceCategory::Housekeeping, &form, Local::now());
        assert_eq!(req.title, "Housekeeping");
        assert_eq!(req.description, "Two bath towels please");
    }

    #[test]
    fn test_fallback_requests_are_pending() {
        for err in [
            ApiError::Status {
                status: 500,
                body: String::new(),
            },
            ApiError::Network("refused".into()),
            ApiError::Decode("eof".into()),
        ] {
            let list = fallback_requests(&err);
            assert!(!list.is_empty());
            assert!(list.iter().any(|r| r.status == RequestStatus::Pending));
        }
    }

    #[test]
    fn test_fallback_title_depends_on_failure_kind() {
        let status = fallback_requests(&ApiError::Status {
            status: 404,
            body: String::new(),
        });
        let network = fallback_requests(&ApiError::Network("down".into()));
        assert_eq!(status[0].title, "No requests available");
        assert_eq!(network[0].title, "Connection error");
    }

    #[test]
    fn test_cycle_request_type_wraps() {
        let mut form = RequestForm::default();
        form.cycle_request_type(ServiceCategory::Maintenance, true);
        assert_eq!(form.request_type, "Air conditioning");
        form.cycle_request_type(ServiceCategory::Maintenance, false);
        assert_eq!(form.request_type, "TV/Internet");
        form.cycle_request_type(ServiceCategory::Maintenance, true);
        assert_eq!(form.request_type, "Air conditioning");
    }

    #[test]
    fn test_form_clear() {
        let mut form = RequestForm {
            request_type: "Lunch".into(),
            request_details: "No onions".into(),
            preferred_time: "noon".into(),
        };
        form.clear();
        assert!(form.is_empty());
    }
}
