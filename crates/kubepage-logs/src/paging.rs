use std::fmt;
use std::str::FromStr;

use crate::error::LogsError;

/// Lines per page when the caller does not ask for a size
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Start index that requests the last page
pub const LAST_PAGE: i64 = -1;

/// Moves between pages of a log, relative to the page being shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMove {
    First,
    Previous,
    Next,
    Last,
}

impl PageMove {
    /// Start index to request for this move from the page at `current`
    pub fn start_index(self, current: i64, page_size: i64) -> i64 {
        match self {
            Self::First => 0,
            Self::Previous => current.saturating_sub(page_size).max(0),
            // Past the end resolves to the last page
            Self::Next => current.saturating_add(page_size),
            Self::Last => LAST_PAGE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Previous => "prev",
            Self::Next => "next",
            Self::Last => "last",
        }
    }
}

impl FromStr for PageMove {
    type Err = LogsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "prev" | "previous" => Ok(Self::Previous),
            "next" => Ok(Self::Next),
            "last" => Ok(Self::Last),
            _ => Err(LogsError::InvalidPageMove(s.to_string())),
        }
    }
}

impl fmt::Display for PageMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
