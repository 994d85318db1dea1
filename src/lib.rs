// Export modules for library usage
pub mod answers;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod contact;
pub mod content;
pub mod errors;
pub mod formatting;
pub mod interactive;
pub mod observability;
pub mod output;
pub mod patterns;
pub mod report;
pub mod scoring;
pub mod session;
pub mod stages;
pub mod submission;

// Re-export commonly used types
pub use crate::answers::{AnswerError, AnswerSet};
pub use crate::codec::{decode, encode, share_link, CodecError};
pub use crate::contact::{validate_contact, ContactAddress, ContactError, ContactPolicy};
pub use crate::content::{Content, Dimension, DimensionId, Question, Stage};
pub use crate::errors::{ReadinessError, Result};
pub use crate::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::patterns::{detect_patterns, PatternRule};
pub use crate::report::{AssessmentResults, DimensionSummary};
pub use crate::scoring::{calculate_results, DimensionScores, ScoreCard};
pub use crate::session::{Flow, FlowError, Page, SessionContext};
pub use crate::stages::classify_stage;
