//! Storage repositories
//!
//! Stores are explicitly constructed and handed to the application state;
//! the coaching core never touches them directly.

pub mod program;
pub mod student;

pub use program::{InMemoryProgramStore, PgProgramStore, ProgramStore};
pub use student::{InMemoryStudentPlanStore, PgStudentPlanStore, StudentPlanStore};
