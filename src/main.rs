use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use kubepage_k8s::KubeClient;
use kubepage_logs::{DEFAULT_PAGE_SIZE, LAST_PAGE, LogService, PageMove};
use kubepage_types::LogQuery;

mod config;

use config::Config;

/// Kubepage - Fetch one page of a Kubernetes container's logs as JSON
#[derive(Parser, Debug)]
#[command(name = "kubepage")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pod name
    #[arg(value_name = "POD")]
    pod: String,

    /// Namespace of the pod [default: default]
    #[arg(short, long)]
    namespace: Option<String>,

    /// Container name (defaults to the pod's first declared container)
    #[arg(short, long, default_value = "")]
    container: String,

    /// Index of the first line; negative or past the end for the last page
    #[arg(long, allow_negative_numbers = true, conflicts_with = "page")]
    start: Option<i64>,

    /// Page to move to from --from: first, prev, next or last
    #[arg(long)]
    page: Option<PageMove>,

    /// Start index of the page currently shown, used with --page [default: 0]
    #[arg(long, requires = "page")]
    from: Option<i64>,

    /// Lines per page [default: 20]
    #[arg(long)]
    count: Option<i64>,

    /// Kubernetes context name (defaults to the current context)
    #[arg(long)]
    context: Option<String>,

    /// Path to a TOML config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log fetch details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = run(args).await;

    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }

    result
}

/// Namespace and page position after merging flags over the config file
#[derive(Debug, PartialEq, Eq)]
struct PageRequest {
    namespace: String,
    count: i64,
    start_index: i64,
}

impl PageRequest {
    fn resolve(args: &Args, config: &Config) -> Self {
        let count = args
            .count
            .or(config.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        // Without an explicit position show the tail of the log
        let start_index = match (args.start, args.page) {
            (Some(start), _) => start,
            (None, Some(page)) => page.start_index(args.from.unwrap_or(0), count),
            (None, None) => LAST_PAGE,
        };

        let namespace = args
            .namespace
            .clone()
            .or_else(|| config.namespace.clone())
            .unwrap_or_else(|| "default".to_string());

        Self {
            namespace,
            count,
            start_index,
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let request = PageRequest::resolve(&args, &config);

    let context = args.context.as_deref().or(config.context.as_deref());
    let client = KubeClient::connect(context).await?;
    debug!(context = ?client.context(), "connected to cluster");

    let service = LogService::new(client).with_policy(config.container_policy());
    let query = LogQuery::new(request.namespace, args.pod)
        .with_container(args.container)
        .with_page(request.start_index, request.count);

    let result = service.pod_logs(&query).await?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_start_is_accepted() {
        let args = Args::try_parse_from(["kubepage", "web-0", "--start", "-1"]).unwrap();
        assert_eq!(args.start, Some(-1));
        assert!(args.container.is_empty());
    }

    #[test]
    fn test_page_move_argument() {
        let args =
            Args::try_parse_from(["kubepage", "web-0", "--page", "next", "--from", "40"]).unwrap();
        assert_eq!(args.page, Some(PageMove::Next));
        assert_eq!(args.from, Some(40));
    }

    #[test]
    fn test_start_conflicts_with_page() {
        assert!(Args::try_parse_from(["kubepage", "web-0", "--start", "3", "--page", "last"]).is_err());
    }

    #[test]
    fn test_unknown_page_move() {
        assert!(Args::try_parse_from(["kubepage", "web-0", "--page", "sideways"]).is_err());
    }

    #[test]
    fn test_from_requires_page() {
        assert!(Args::try_parse_from(["kubepage", "web-0", "--from", "40"]).is_err());
    }

    fn resolve(argv: &[&str], config: &Config) -> PageRequest {
        let mut full = vec!["kubepage", "web-0"];
        full.extend_from_slice(argv);
        PageRequest::resolve(&Args::try_parse_from(full).unwrap(), config)
    }

    #[test]
    fn test_count_precedence() {
        let config = Config {
            page_size: Some(50),
            ..Default::default()
        };
        assert_eq!(resolve(&["--count", "10"], &config).count, 10);
        assert_eq!(resolve(&[], &config).count, 50);
        assert_eq!(resolve(&[], &Config::default()).count, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_namespace_precedence() {
        let config = Config {
            namespace: Some("payments".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(&["-n", "web"], &config).namespace, "web");
        assert_eq!(resolve(&[], &config).namespace, "payments");
        assert_eq!(resolve(&[], &Config::default()).namespace, "default");
    }

    #[test]
    fn test_start_index_selection() {
        let config = Config::default();
        assert_eq!(resolve(&[], &config).start_index, LAST_PAGE);
        assert_eq!(resolve(&["--start", "7"], &config).start_index, 7);
        assert_eq!(resolve(&["--page", "prev", "--from", "5"], &config).start_index, 0);
        assert_eq!(resolve(&["--page", "next", "--from", "40"], &config).start_index, 60);
        assert_eq!(resolve(&["--page", "next"], &config).start_index, 20);
        assert_eq!(
            resolve(&["--page", "next", "--from", "40", "--count", "5"], &config).start_index,
            45
        );
    }
}
