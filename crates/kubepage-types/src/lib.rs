//! Shared types for kubepage
//!
//! This crate contains the request and response structures passed between
//! the fetcher, the log windowing core and the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Kubernetes Resource Types
// ============================================================================

/// Pod information needed to fetch and label a log window
#[derive(Clone, Debug)]
pub struct PodInfo {
    pub name: String,
    pub namespace: String,
    /// Containers in the order they are declared in the pod spec
    pub containers: Vec<ContainerInfo>,
    pub created_at: Option<DateTime<Utc>>,
}

impl PodInfo {
    pub fn new(name: String, namespace: String) -> Self {
        Self {
            name,
            namespace,
            containers: Vec::new(),
            created_at: None,
        }
    }

    /// Names of the declared containers, in declaration order
    pub fn container_names(&self) -> impl Iterator<Item = &str> {
        self.containers.iter().map(|c| c.name.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct ContainerInfo {
    pub name: String,
}

impl ContainerInfo {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

// ============================================================================
// Log Types
// ============================================================================

/// Which part of a container's log should be returned.
///
/// `start_index` and `count` describe the requested page. A negative
/// `start_index`, or one past the end of the log, asks for the last page.
/// An empty `container` means "use the pod's default container".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogQuery {
    pub namespace: String,
    pub pod_id: String,
    pub container: String,
    pub start_index: i64,
    pub count: i64,
}

impl LogQuery {
    pub fn new(namespace: impl Into<String>, pod_id: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            pod_id: pod_id.into(),
            container: String::new(),
            start_index: 0,
            count: 0,
        }
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    pub fn with_page(mut self, start_index: i64, count: i64) -> Self {
        self.start_index = start_index;
        self.count = count;
        self
    }

    /// Whether the default container should be resolved from the pod
    pub fn uses_default_container(&self) -> bool {
        self.container.is_empty()
    }
}

/// One page of a container's log plus where that page sits in the full log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogWindowResult {
    /// Pod name
    #[serde(rename = "podId")]
    pub pod_id: String,

    /// When the pod was created; passed through for display only
    #[serde(rename = "sinceTime")]
    pub since_time: Option<DateTime<Utc>>,

    /// Selected log lines
    #[serde(rename = "logs")]
    pub lines: Vec<String>,

    /// The container the logs are for
    pub container: String,

    /// Total number of lines in the log at fetch time
    pub total: usize,

    /// Index of the first returned line
    #[serde(rename = "startIndex")]
    pub start_index: usize,
}

impl LogWindowResult {
    /// Index one past the last returned line
    pub fn end_index(&self) -> usize {
        self.start_index + self.lines.len()
    }

    pub fn is_first_page(&self) -> bool {
        self.start_index == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.end_index() >= self.total
    }
}
