//! Kubernetes client for kubepage

use anyhow::{Context, Result};
use k8s_openapi::api::core::v1::Pod;
use kube::Api;
use kube::api::LogParams;
use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::debug;

use crate::source::{PodLogSource, pod_to_info};
use kubepage_types::PodInfo;

/// Kubernetes client wrapper
#[derive(Clone)]
pub struct KubeClient {
    client: kube::Client,
    context: Option<String>,
}

impl KubeClient {
    /// Connect to the cluster.
    ///
    /// With a context name the kubeconfig is read and that context is used;
    /// otherwise the configuration is inferred (current context, or the
    /// in-cluster service account).
    pub async fn connect(context: Option<&str>) -> Result<Self> {
        let config = match context {
            Some(context_name) => {
                let kubeconfig = Kubeconfig::read()
                    .context("Failed to read kubeconfig. Is kubectl configured?")?;

                kube::Config::from_custom_kubeconfig(
                    kubeconfig,
                    &KubeConfigOptions {
                        context: Some(context_name.to_string()),
                        ..Default::default()
                    },
                )
                .await
                .context(format!(
                    "Failed to create config for context: {}",
                    context_name
                ))?
            }
            None => kube::Config::infer()
                .await
                .context("Failed to infer Kubernetes configuration")?,
        };

        let client = kube::Client::try_from(config).context("Failed to create client")?;

        Ok(Self {
            client,
            context: context.map(str::to_string),
        })
    }

    /// Get the explicitly selected context name
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

impl PodLogSource for KubeClient {
    async fn get_pod(&self, namespace: &str, pod: &str) -> Result<PodInfo> {
        debug!(namespace, pod, "fetching pod");
        let found = self.pods(namespace).get(pod).await.context(format!(
            "Failed to get pod '{}' in namespace '{}'",
            pod, namespace
        ))?;

        Ok(pod_to_info(found, namespace))
    }

    async fn get_raw_logs(&self, namespace: &str, pod: &str, container: &str) -> Result<String> {
        // A one-shot read of everything the container has written so far
        let params = LogParams {
            container: Some(container.to_string()),
            follow: false,
            previous: false,
            timestamps: true,
            ..Default::default()
        };

        debug!(namespace, pod, container, "fetching container logs");
        self.pods(namespace)
            .logs(pod, &params)
            .await
            .context(format!(
                "Failed to read logs of container '{}' in pod '{}'",
                container, pod
            ))
    }
}
