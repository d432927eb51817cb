//! Weather page: county search and rain alerts

use rust_decimal::Decimal;
use serde::Serialize;

use super::matches_query;
use crate::models::WeatherRecord;

/// Rainfall above which a county is flagged, in millimetres
pub const RAIN_ALERT_THRESHOLD_MM: Decimal = Decimal::TEN;

/// Counties named in the alert banner before collapsing into "and N more"
pub const RAIN_ALERT_BANNER_LIMIT: usize = 5;

pub fn filter_weather<'a>(records: &'a [WeatherRecord], query: &str) -> Vec<&'a WeatherRecord> {
    records
        .iter()
        .filter(|record| matches_query(&record.county, query))
        .collect()
}

/// Whether a county should appear in the rain alert banner
pub fn is_rain_alert(record: &WeatherRecord) -> bool {
    record.rainfall_mm > RAIN_ALERT_THRESHOLD_MM || record.forecast.contains("Rain")
}

pub fn rain_alerts(records: &[WeatherRecord]) -> Vec<&WeatherRecord> {
    records.iter().filter(|record| is_rain_alert(record)).collect()
}

/// Banner text listing alerted counties, `None` when there are none
pub fn summarize_rain_alerts(alerts: &[&WeatherRecord]) -> Option<String> {
    if alerts.is_empty() {
        return None;
    }

    let named: Vec<&str> = alerts
        .iter()
        .take(RAIN_ALERT_BANNER_LIMIT)
        .map(|record| record.county.as_str())
        .collect();
    let mut summary = named.join(", ");

    if alerts.len() > RAIN_ALERT_BANNER_LIMIT {
        summary.push_str(&format!(" and {} more", alerts.len() - RAIN_ALERT_BANNER_LIMIT));
    }
    Some(summary)
}

/// Rain alert banner payload
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RainAlertReport {
    pub count: usize,
    pub counties: Vec<String>,
    pub summary: Option<String>,
}

impl RainAlertReport {
    pub fn from_records(records: &[WeatherRecord]) -> Self {
        let alerts = rain_alerts(records);
        Self {
            count: alerts.len(),
            counties: alerts.iter().map(|record| record.county.clone()).collect(),
            summary: summarize_rain_alerts(&alerts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CLEAR_FORECAST, RAIN_FORECAST};
    use crate::models::WeatherCondition;
    use std::str::FromStr;

    fn record(county: &str, rainfall: &str, forecast: &str) -> WeatherRecord {
        WeatherRecord {
            county: county.to_string(),
            temperature_celsius: 24,
            condition: WeatherCondition::Cloudy,
            humidity_percent: 60,
            rainfall_mm: Decimal::from_str(rainfall).unwrap(),
            wind_speed_kmh: 10,
            forecast: forecast.to_string(),
            advisory: "Good weather for harvesting. Dry crops thoroughly before storage.".to_string(),
        }
    }

    #[test]
    fn test_rain_alert_rules() {
        assert!(is_rain_alert(&record("Kisii", "10.1", CLEAR_FORECAST)));
        assert!(!is_rain_alert(&record("Kisii", "10.0", CLEAR_FORECAST)));
        assert!(is_rain_alert(&record("Kisii", "0.0", RAIN_FORECAST)));
    }

    #[test]
    fn test_summary_collapses_after_five() {
        let counties = ["Bomet", "Busia", "Embu", "Kisii", "Lamu", "Meru", "Nandi"];
        let records: Vec<WeatherRecord> = counties
            .iter()
            .map(|county| record(county, "12.5", CLEAR_FORECAST))
            .collect();

        let report = RainAlertReport::from_records(&records);
        assert_eq!(report.count, 7);
        assert_eq!(
            report.summary.as_deref(),
            Some("Bomet, Busia, Embu, Kisii, Lamu and 2 more")
        );

        let few = RainAlertReport::from_records(&records[..2]);
        assert_eq!(few.summary.as_deref(), Some("Bomet, Busia"));

        let dry = vec![record("Wajir", "0.0", CLEAR_FORECAST)];
        assert_eq!(RainAlertReport::from_records(&dry).summary, None);
    }

    #[test]
    fn test_county_search() {
        let records = vec![
            record("Nyeri", "1.0", CLEAR_FORECAST),
            record("Nyamira", "1.0", CLEAR_FORECAST),
            record("Kisumu", "1.0", CLEAR_FORECAST),
        ];
        assert_eq!(filter_weather(&records, "ny").len(), 2);
        assert_eq!(filter_weather(&records, "").len(), 3);
    }
}
