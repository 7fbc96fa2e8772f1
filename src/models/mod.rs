pub mod miner;
pub mod scenario;
pub mod summary;
pub mod tax;

pub use miner::*;
pub use scenario::*;
pub use summary::*;
pub use tax::*;
