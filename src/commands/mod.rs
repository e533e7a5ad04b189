pub mod dashboard;
pub mod fuzz;

use crate::utils::DashboardError;

const USAGE: &str = "Usage:
  trade-dashboard [dashboard]               build the dashboard page
  trade-dashboard fuzz <file> [chunk-size]  replay a transfer fuzz corpus";

/// Dispatch command-line arguments (without the program name)
pub async fn handle_args(args: &[String]) -> Result<(), DashboardError> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.split_first() {
        None => dashboard::execute(&[]).await,
        Some((command, rest)) => match command.to_lowercase().as_str() {
            "dashboard" => dashboard::execute(rest).await,
            "fuzz" => fuzz::execute(rest),
            "help" | "-h" | "--help" => {
                println!("{}", USAGE);
                Ok(())
            }
            other => Err(DashboardError::Usage(format!(
                "❌ Unknown command: '{}'\n{}",
                other, USAGE
            ))),
        },
    }
}
