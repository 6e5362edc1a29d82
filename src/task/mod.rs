pub mod analysis;
pub mod container;
pub mod execution;
pub mod manager;
pub mod registry;
pub mod scheduler;
pub mod types;


pub use analysis::*;
pub use container::*;
pub use execution::*;
pub use manager::*;
pub use registry::*;
pub use scheduler::*;
pub use types::*;
