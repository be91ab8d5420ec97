// Gateway module for models - follows the Train Station Pattern
// Domain value objects as received from the server; never mutated locally

// Private submodules - not directly accessible from outside
mod catalog;
mod question;
mod result;

// Public re-exports - the ONLY way to access model types
pub use catalog::{Assignment, Category, Course, Lecture, Resource, ResourceType, Test};
pub use question::{Difficulty, Question, QuestionType, SubQuestion};
pub use result::{TestResult, UserSummary};
