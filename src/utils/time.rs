use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Like [`now`] but never earlier than `previous`, so update stamps stay monotonic.
pub fn now_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    now().max(previous)
}
