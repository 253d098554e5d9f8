pub mod error;
pub mod outline;
pub mod serp;

pub use error::{BriefError, Result, ValidationError, ValidationErrorKind};
pub use outline::{ArticleStructure, ContentRole, GenerationStep, Section};
pub use serp::{Competitor, Heading, Ideas, IntentStats, Question, SerpProfile};
