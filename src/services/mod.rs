pub mod chart_service;
pub mod fuzz_service;
pub mod render_service;
pub mod transaction_service;
pub mod wallet_service;
