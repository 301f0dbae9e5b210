pub mod llm;
pub mod preprocess;
pub mod standardize;

pub use llm::OpenAiPlaceClassifier;
pub use standardize::{LocationStandardizer, UNKNOWN};
