// Modular tools
pub mod fetch;
pub mod simplify;
