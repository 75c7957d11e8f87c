use chrono::NaiveDate;
use labgrade_core::assessment::{AssessmentStatus, TrendPeriod};
use labgrade_core::format::OutputFormat;
use labgrade_core::rubric::LabType;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse lab type from string
pub fn parse_lab_type(s: &str) -> std::result::Result<LabType, String> {
    s.parse::<LabType>().map_err(|e| e.to_string())
}

/// Parse assessment status from string
pub fn parse_status(s: &str) -> std::result::Result<AssessmentStatus, String> {
    s.parse::<AssessmentStatus>().map_err(|e| e.to_string())
}

/// Parse a calendar date given as `YYYY-MM-DD`
pub fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("expected YYYY-MM-DD, got '{}'", s))
}

/// Parse trend period from string
pub fn parse_period(s: &str) -> std::result::Result<TrendPeriod, String> {
    s.parse::<TrendPeriod>().map_err(|e| e.to_string())
}

/// Parse a criterion score given as `ID=VALUE`
pub fn parse_score(s: &str) -> std::result::Result<(String, f64), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got '{}'", s))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing criterion id in '{}'", s));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid score '{}' for {}", value.trim(), id))?;
    Ok((id.to_string(), value))
}

/// Parse a criterion given as `NAME` or `NAME:WEIGHT` (weight in percent)
pub fn parse_criterion_spec(s: &str) -> std::result::Result<(String, Option<f64>), String> {
    let (name, weight) = match s.rsplit_once(':') {
        Some((name, weight)) => {
            let weight = weight
                .trim()
                .trim_end_matches('%')
                .parse::<f64>()
                .map_err(|_| format!("invalid weight '{}' for {}", weight.trim(), name.trim()))?;
            (name, Some(weight))
        }
        None => (s, None),
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing criterion name in '{}'", s));
    }
    Ok((name.to_string(), weight))
}
