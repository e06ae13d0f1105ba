

pub mod cleaner;
pub mod formatter;
pub mod lookup;
pub mod models;
pub mod ranking;

pub use cleaner::{clean_label_text, remove_duplicate_sentences};
pub use formatter::{format_drug_info, DrugInfoFormatter};
pub use lookup::lookup;
pub use models::{DrugEntry, DrugMap, KnowledgeBase, RankedDrug, TextOrList};
pub use ranking::{rank, select_top};
