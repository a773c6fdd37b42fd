//! Checker engine: sequential batch verification behind a resolver seam.
mod engine;
mod resolve;
mod types;

pub use engine::{BatchSubmitter, EngineHandle};
pub use resolve::{
    partition_verdict, synthetic_title, Resolver, ResolverSettings, SimulatedResolver,
};
pub use types::{EngineEvent, EntryId, Verdict, VerdictStatus};
