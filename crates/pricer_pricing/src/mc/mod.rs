//! Monte Carlo simulation of European options under geometric Brownian motion.
//!
//! Terminal prices are sampled exactly in one step,
//! S_T = S·exp((r - σ²/2)T + σ√T·Z), and the price is the discounted mean
//! payoff.
//!
//! ## Parallelism
//!
//! Paths are partitioned into blocks of [`SIMULATION_BLOCK_SIZE`]. Block `b`
//! draws from `PricerRng::for_stream(seed, b)`, blocks run on the rayon pool,
//! and block statistics are merged in block order. The estimate therefore
//! depends only on `(params, side, n_paths, seed)`.

mod config;
mod pricer;

pub use config::{
    SimulationConfig, SimulationConfigBuilder, DEFAULT_SEED, DEFAULT_SIMULATION_PATHS,
};
pub use pricer::{SimulationResult, SimulationSolver, SIMULATION_BLOCK_SIZE};
