use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Current time at the precision the store persists (milliseconds).
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Render a timestamp in the same text form as the column default.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
