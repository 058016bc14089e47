pub mod accelerator;
pub mod classifier;
pub mod model;

pub use accelerator::BatchAccelerator;
pub use classifier::TurnaroundClassifier;
pub use model::{ClassifierSummary, PassSummary};
