pub mod generation;

pub use generation::{ClientFactory, DefaultClientFactory, GenerationService};
