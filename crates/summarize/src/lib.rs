pub mod prompt;
pub mod refine;
pub mod summarizer;

pub use refine::{DensityRefiner, RefineOptions, RefinementLoop};
pub use summarizer::Summarizer;
