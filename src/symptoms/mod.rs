

pub mod aggregator;
pub mod normalizer;
pub mod session;

pub use aggregator::{aggregate, SymptomSet};
pub use normalizer::{canonical_drug_name, normalize, split_symptom_list};
pub use session::SessionState;
