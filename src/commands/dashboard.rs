use std::fs;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::api::backend::{BackendClient, RecordSource};
use crate::api::wallet::{JsonRpcWalletProvider, WalletProvider};
use crate::config::DashboardConfig;
use crate::models::{RefreshReport, SimulationParams, WalletStatus};
use crate::services::transaction_service::RefreshController;
use crate::services::{chart_service, wallet_service};
use crate::utils::{DashboardError, DashboardPage, HtmlTable};

const PAGE_TITLE: &str = "Trade Dashboard";
const CHART_FILE: &str = "monte_carlo.png";
const CHART_SIZE: (u32, u32) = (1000, 600);

/// Build the dashboard once, or keep refreshing it when an interval is configured
pub async fn execute(args: &[&str]) -> Result<(), DashboardError> {
    if !args.is_empty() {
        return Err(DashboardError::Usage(format!(
            "❌ `dashboard` takes no arguments, got: {}",
            args.join(" ")
        )));
    }

    let config = DashboardConfig::from_env()?;
    info!("📊 Building dashboard from {} into {}", config.api_url, config.output_dir.display());
    fs::create_dir_all(&config.output_dir)?;

    let chart_file = render_chart(&config);

    let wallet = match &config.wallet_rpc_url {
        Some(url) => match JsonRpcWalletProvider::new(url, config.request_timeout) {
            Ok(provider) => Some(provider),
            Err(e) => {
                warn!("Wallet provider unavailable: {}", e);
                None
            }
        },
        None => None,
    };
    let wallet_status = wallet_service::connect_wallet(
        wallet.as_ref().map(|w| w as &dyn WalletProvider),
    )
    .await;

    let source = BackendClient::new(&config.api_url, config.request_timeout)?;
    let controller = RefreshController::new(
        source,
        Arc::new(Mutex::new(HtmlTable::trades())),
        &config.explorer_url,
    );

    refresh_and_write(&controller, &config, &wallet_status, &chart_file).await?;

    let Some(period) = config.refresh_interval else {
        return Ok(());
    };

    info!("🔁 Refreshing every {}s, press Ctrl-C to stop", period.as_secs());
    let mut ticker = tokio::time::interval(period);
    // The first tick completes immediately and the initial cycle already ran
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                refresh_tick(&controller, &config, &wallet_status, &chart_file).await;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Stopping dashboard refresh");
                return Ok(());
            }
        }
    }
}

/// Render the histogram next to the page. A failure is logged and the page
/// is built without the chart.
fn render_chart(config: &DashboardConfig) -> Option<String> {
    let path = config.output_dir.join(CHART_FILE);
    match chart_service::generate_chart(&SimulationParams::default(), &path, CHART_SIZE.0, CHART_SIZE.1) {
        Ok(()) => {
            info!("📈 Chart written to {}", path.display());
            Some(CHART_FILE.to_string())
        }
        Err(e) => {
            error!("Failed to render chart: {}", e);
            None
        }
    }
}

/// One periodic cycle. Errors are logged and the loop keeps running.
async fn refresh_tick<S: RecordSource>(
    controller: &RefreshController<S, HtmlTable>,
    config: &DashboardConfig,
    wallet_status: &WalletStatus,
    chart_file: &Option<String>,
) {
    if let Err(e) = refresh_and_write(controller, config, wallet_status, chart_file).await {
        error!("Failed to write dashboard, retrying next tick: {}", e);
    }
}

async fn refresh_and_write<S: RecordSource>(
    controller: &RefreshController<S, HtmlTable>,
    config: &DashboardConfig,
    wallet_status: &WalletStatus,
    chart_file: &Option<String>,
) -> Result<(), DashboardError> {
    if let RefreshReport::Failed(reason) = controller.refresh().await {
        warn!("Keeping previous trades table: {}", reason);
    }

    let trades_html = {
        let target = controller.target();
        let table = target.lock().await;
        table.render()
    };

    let page = DashboardPage::new(
        PAGE_TITLE,
        wallet_status.clone(),
        chart_file.clone(),
        trades_html,
        controller.last_success().await,
    );
    let path = page.write_to(&config.output_dir)?;
    info!("✅ Dashboard written to {}", path.display());
    Ok(())
}
