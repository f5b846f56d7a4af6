pub mod allocation;
pub mod health;
pub mod market;
pub mod projections;
