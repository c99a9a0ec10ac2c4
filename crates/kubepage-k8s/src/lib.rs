//! Kubernetes log fetching for kubepage
//!
//! This crate is the boundary to the cluster: it looks up pods and reads
//! the complete log text of one of their containers.

mod client;
mod source;

pub use client::KubeClient;
pub use source::{PodLogSource, pod_to_info};

// Re-export types that are used in our public API
pub use kubepage_types::{ContainerInfo, PodInfo};
