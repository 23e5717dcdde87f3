//! Student aggregate - enrollment data and lesson history.

mod lesson;
mod student;

pub use lesson::{Evaluation, Lesson, LessonEntry};
pub use student::Student;
