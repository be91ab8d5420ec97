// Gateway module for services - follows the Train Station Pattern
// Thin, stateless adapters over ApiGateway; nothing is cached between calls

// Private submodules - not directly accessible from outside
mod category;
mod question;
mod result;
mod support;
mod user;

// Public re-exports - the ONLY way to access service functionality
pub use category::{CategoryFilter, CategoryService, TestFilter};
pub use question::{QuestionFilter, QuestionService};
pub use result::{ResultFilter, ResultService};
pub use user::{CourseFilter, UserFilter, UserService};
