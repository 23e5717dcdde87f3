//! Catalog entities - methods, instruments and teaching staff.

mod instrument;
mod method;
mod teacher;

pub use instrument::Instrument;
pub use method::{InstrumentScope, Method, ALL_INSTRUMENTS};
pub use teacher::Teacher;
