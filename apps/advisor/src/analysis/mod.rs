// Resume analysis: prompts, structured-output recovery, scoring, skill gap and the pipeline
// that ties them together. All generation goes through llm_client::TextGenerator.

pub mod career_path;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod scoring;
pub mod skill_gap;
pub mod structured_output;
