pub mod io;
pub mod row;

pub use io::{order_headers, read_csv, read_csv_path, write_csv, write_csv_path, Frame};
pub use row::Row;
