pub mod builder;
pub mod engine;

pub use builder::EngineBuilder;
pub use engine::{FootprintEngine, ProfileEstimate};
