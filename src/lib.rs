pub mod config;
pub mod error;
pub mod mmu;
pub mod simulation;
pub mod storage;
pub mod trace;
pub mod utils;

#[cfg(test)]
mod tests;
