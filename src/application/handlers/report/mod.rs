//! Report export handlers.

mod export_student_report;
mod save_student_report;

pub use export_student_report::{
    ExportReportError, ExportStudentReportHandler, ExportStudentReportQuery,
};
pub use save_student_report::{SaveReportError, SaveStudentReportHandler, SaveStudentReportQuery};
