pub mod health;
pub mod recommendation;
pub mod restaurant;
pub mod server;
