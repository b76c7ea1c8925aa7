use chrono::{DateTime, FixedOffset, Offset, Utc};

/// JST is UTC+9
const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Get the current time in JST
pub fn now_jst() -> DateTime<FixedOffset> {
    let jst_offset = FixedOffset::east_opt(JST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix());
    Utc::now().with_timezone(&jst_offset)
}
