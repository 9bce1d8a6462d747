use chrono::{DateTime, NaiveDateTime};

/// parse the save-time stamp captured from the OWNER line. exports written by
/// different scanner software versions vary in whether they carry fractional
/// seconds and a utc offset, so a few formats are tried in order
pub fn parse_timestamp(raw:&str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(t) = DateTime::parse_from_str(trimmed,"%Y-%m-%d %H:%M:%S%.f %z") {
        return Some(t.naive_local())
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f","%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(trimmed,fmt) {
            return Some(t)
        }
    }
    None
}
