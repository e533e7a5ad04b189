use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;

const DEFAULT_DIRECTIVES: [&str; 2] = ["trade_dashboard=debug", "hyper=warn"];

/// `RUST_LOG` plus the crate's default directives
fn env_filter() -> EnvFilter {
    let mut filter = EnvFilter::from_default_env();
    for directive in DEFAULT_DIRECTIVES {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🤖 Starting trade dashboard v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = commands::handle_args(&args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_carries_default_directives() {
        let rendered = env_filter().to_string().to_lowercase();
        assert!(rendered.contains("trade_dashboard=debug"));
        assert!(rendered.contains("hyper=warn"));
    }
}
