mod emphasis_set;

pub use emphasis_set::{EmphasisSet, ListenerId};
