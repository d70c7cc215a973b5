//! Per-source column-candidate tables and resolved views.
//!
//! One module per raw source, each declaring the ordered candidate lists for
//! the logical fields that source is expected to carry, the default file
//! name the context loader looks for, and a typed view of the resolved
//! column indexes the reconciler consumes.

pub mod causes;
pub mod divisions;
pub mod mortality;

pub use causes::CauseColumns;
pub use divisions::DivisionColumns;
pub use mortality::MortalityColumns;
