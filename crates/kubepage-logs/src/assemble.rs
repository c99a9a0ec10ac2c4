use chrono::{DateTime, Utc};

use kubepage_types::{LogQuery, LogWindowResult};

use crate::error::LogsResult;
use crate::window::select_window;

/// Split raw log text into lines.
///
/// Every `'\n'` separates two entries, so text ending in a newline keeps a
/// trailing empty line. Empty text has no lines at all.
pub fn split_lines(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('\n').map(str::to_string).collect()
}

/// Build the response for `query` from the full raw log of its container
pub fn assemble(
    since_time: Option<DateTime<Utc>>,
    raw: &str,
    query: &LogQuery,
) -> LogsResult<LogWindowResult> {
    let lines = split_lines(raw);
    let (start_index, window) = select_window(&lines, query.start_index, query.count)?;

    Ok(LogWindowResult {
        pod_id: query.pod_id.clone(),
        since_time,
        lines: window.to_vec(),
        container: query.container.clone(),
        total: lines.len(),
        start_index,
    })
}
