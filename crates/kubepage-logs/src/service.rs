use tracing::{debug, info};

use kubepage_k8s::PodLogSource;
use kubepage_types::{LogQuery, LogWindowResult, PodInfo};

use crate::assemble::assemble;
use crate::error::{LogsError, LogsResult};
use crate::window::validate_page_size;

/// How to pick a container when the query does not name one
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContainerPolicy {
    /// The first container declared in the pod spec
    #[default]
    FirstDeclared,
    /// The first declared container whose name is in the list, falling back
    /// to the first declared container
    Preferred(Vec<String>),
}

impl ContainerPolicy {
    /// Pick a container of `pod`, or `None` if it declares none
    pub fn resolve<'a>(&self, pod: &'a PodInfo) -> Option<&'a str> {
        let preferred = match self {
            Self::FirstDeclared => None,
            Self::Preferred(names) => pod
                .container_names()
                .find(|name| names.iter().any(|n| n.as_str() == *name)),
        };
        preferred.or_else(|| pod.container_names().next())
    }
}

/// Fetches a container's log and returns the requested page of it
pub struct LogService<S> {
    source: S,
    policy: ContainerPolicy,
}

impl<S: PodLogSource> LogService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            policy: ContainerPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ContainerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get one page of a pod container's log.
    ///
    /// When the query names no container, the container policy picks one.
    /// Lookup failures are returned as they are; nothing is retried.
    pub async fn pod_logs(&self, query: &LogQuery) -> LogsResult<LogWindowResult> {
        validate_page_size(query.count)?;

        debug!(
            namespace = %query.namespace,
            pod = %query.pod_id,
            container = %query.container,
            "getting pod logs"
        );

        let pod = self
            .source
            .get_pod(&query.namespace, &query.pod_id)
            .await
            .map_err(LogsError::Lookup)?;

        let container = if query.uses_default_container() {
            let resolved = self
                .policy
                .resolve(&pod)
                .ok_or_else(|| LogsError::NoContainer {
                    namespace: query.namespace.clone(),
                    pod: query.pod_id.clone(),
                })?;
            debug!(container = resolved, "resolved default container");
            resolved.to_string()
        } else {
            query.container.clone()
        };

        let raw = self
            .source
            .get_raw_logs(&query.namespace, &query.pod_id, &container)
            .await
            .map_err(LogsError::Lookup)?;

        let query = LogQuery {
            container,
            ..query.clone()
        };
        let result = assemble(pod.created_at, &raw, &query)?;

        info!(
            pod = %result.pod_id,
            container = %result.container,
            total = result.total,
            start_index = result.start_index,
            returned = result.lines.len(),
            "selected log window"
        );

        Ok(result)
    }
}
