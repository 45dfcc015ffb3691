pub mod entropy;
pub mod types;

pub use entropy::{block_seed, mix_seed, select_index, EntropyInputs};
pub use types::{BeaconResponse, OracleQueryMsg, RandomnessSource};
