pub mod counts;
pub mod dataset;
pub mod tree;

pub use counts::CountTable;
pub use dataset::{BiomeDataset, Classification};
pub use tree::ClassificationTree;
