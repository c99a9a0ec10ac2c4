use std::future::Future;

use anyhow::Result;
use k8s_openapi::api::core::v1::Pod;

use kubepage_types::{ContainerInfo, PodInfo};

/// Where pod metadata and raw container logs come from.
///
/// Implementations return the underlying failure unchanged; callers decide
/// what to do with it.
pub trait PodLogSource {
    /// Look up a single pod
    fn get_pod(&self, namespace: &str, pod: &str) -> impl Future<Output = Result<PodInfo>> + Send;

    /// Read the complete current log of one container as a single string
    fn get_raw_logs(
        &self,
        namespace: &str,
        pod: &str,
        container: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Convert a k8s Pod to PodInfo
pub fn pod_to_info(pod: Pod, namespace: &str) -> PodInfo {
    let name = pod.metadata.name.unwrap_or_default();
    let mut info = PodInfo::new(name, namespace.to_string());
    info.created_at = pod.metadata.creation_timestamp.map(|t| t.0);

    if let Some(spec) = pod.spec {
        // Declared containers, not statuses: statuses are unordered and
        // missing until the pod is scheduled
        info.containers = spec
            .containers
            .into_iter()
            .map(|c| ContainerInfo::new(c.name))
            .collect();
    }

    info
}
