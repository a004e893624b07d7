pub mod format;
pub mod loaders;
pub mod report;
pub mod score;
pub mod submission;

pub use format::FormatCategory;
pub use loaders::{load_all_batches, load_batch_file, parse_batch};
pub use report::{BatchReport, QualityReport, ScoredSubmission};
pub use score::{
    round3, Dimension, DimensionScore, QualityRating, ScoringResult, DEFAULT_PASS_THRESHOLD,
    RATING_TABLE,
};
pub use submission::{Submission, SubmissionBatch};
