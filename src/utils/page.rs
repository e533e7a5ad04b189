use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::format::escape_html;
use crate::models::WalletStatus;

const STYLE: &str = "\
body { background: #0f1620; color: #e0e0e0; font-family: sans-serif; margin: 2rem; }
section { background: #1a2430; border-radius: 8px; padding: 1rem; margin-bottom: 1.5rem; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 0.4rem 0.6rem; border-bottom: 1px solid #2a3644; text-align: left; }
a { color: #00ccff; }
.status { padding: 0.1rem 0.5rem; border-radius: 4px; background: #2a3644; }
.status.completed, .status.success { background: #0d4d33; }
.status.failed, .status.error { background: #5c1a26; }
.status.pending { background: #4d430d; }
.pnl-positive { color: #00ff88; }
.pnl-negative { color: #ff3860; }";

/// The static dashboard document
pub struct DashboardPage {
    pub title: String,
    pub wallet_status: WalletStatus,
    /// File name of the histogram image next to the page, if it rendered
    pub chart_file: Option<String>,
    pub trades_html: String,
    /// Time of the last successful refresh, `None` before the first one
    pub last_refresh: Option<DateTime<Utc>>,
}

impl DashboardPage {
    pub const FILE_NAME: &'static str = "index.html";

    pub fn new(
        title: &str,
        wallet_status: WalletStatus,
        chart_file: Option<String>,
        trades_html: String,
        last_refresh: Option<DateTime<Utc>>,
    ) -> Self {
        DashboardPage {
            title: title.to_string(),
            wallet_status,
            chart_file,
            trades_html,
            last_refresh,
        }
    }

    /// Render the full HTML document
    pub fn render(&self) -> String {
        let title = escape_html(&self.title);

        let chart = match &self.chart_file {
            Some(file) => format!(
                "<img id=\"monte-carlo-plot\" src=\"{}\" alt=\"Monte Carlo simulation\"/>",
                escape_html(file)
            ),
            None => "<p id=\"monte-carlo-plot\">Chart unavailable</p>".to_string(),
        };

        let accounts = match &self.wallet_status {
            WalletStatus::Connected { accounts } if !accounts.is_empty() => format!(
                "<ul id=\"wallet-accounts\">{}</ul>",
                accounts
                    .iter()
                    .map(|a| format!("<li>{}</li>", escape_html(a)))
                    .collect::<String>()
            ),
            _ => String::new(),
        };

        let updated = match self.last_refresh {
            Some(at) => at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => "never".to_string(),
        };

        format!(
            "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\"/>
<title>{title}</title>
<style>
{style}
</style>
</head>
<body>
<h1>{title}</h1>
<section>
<h2>Wallet</h2>
<p id=\"web3-status\">{wallet}</p>
{accounts}
</section>
<section>
<h2>Monte Carlo Simulation</h2>
{chart}
</section>
<section>
<h2>Recent Operations</h2>
{trades}
<p class=\"updated\">Last refresh: {updated}</p>
</section>
</body>
</html>
",
            title = title,
            style = STYLE,
            wallet = escape_html(self.wallet_status.label()),
            accounts = accounts,
            chart = chart,
            trades = self.trades_html,
            updated = updated,
        )
    }

    /// Write the page as `index.html` inside `dir`, creating it if needed
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(Self::FILE_NAME);
        fs::write(&path, self.render())?;
        Ok(path)
    }
}
