pub mod assessment;
pub mod health;
pub mod history;
pub mod server;
