pub mod cli;
pub mod config;
pub mod core;
pub mod operation;
pub mod pip;
pub mod venv;

#[cfg(test)]
mod testing;

pub use operation::create_and_process;
