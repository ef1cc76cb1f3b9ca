pub mod dataset;
pub mod llm;
