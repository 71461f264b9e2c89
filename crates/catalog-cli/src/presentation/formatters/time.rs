use chrono::{DateTime, Utc};

/// Calendar date a record was added, or "unknown" for seeds without one
pub fn format_added(created_at: Option<DateTime<Utc>>) -> String {
    match created_at {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_added() {
        let ts = Utc.with_ymd_and_hms(2024, 9, 2, 10, 15, 0).unwrap();
        assert_eq!(format_added(Some(ts)), "2024-09-02");
        assert_eq!(format_added(None), "unknown");
    }
}
