pub mod scoring_flow;
pub mod submission_ctx;

pub use scoring_flow::{score, score_submission, ScoringFlow};
pub use submission_ctx::SubmissionCtx;
