//! Row, cell and output data shapes.

pub mod cell;
pub mod row;
pub mod series;

pub use cell::CellValue;
pub use row::{RawRow, read_rows, rows_from_json};
pub use series::{Point, Series, TimeseriesBatch};
