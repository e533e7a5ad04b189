pub mod backend;
pub mod wallet;
