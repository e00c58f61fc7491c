pub mod audit;
pub mod session;
