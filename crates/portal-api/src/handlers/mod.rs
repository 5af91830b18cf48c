pub mod health;
pub mod navigation;
