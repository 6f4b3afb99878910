//! TR_J1 report pipeline: request validation, query building and COUNTER
//! document assembly.

pub mod assembler;
pub mod error;
pub mod models;
pub mod validate;

pub use assembler::assemble_tr_j1;
pub use error::SushiError;
pub use models::CounterReport;
pub use validate::{DateRange, RawReportParams, ReportRequest};
