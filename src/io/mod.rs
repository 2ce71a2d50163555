/*!
# IO utilities

Line oriented reading and tab separated writing of OpenEA dataset files.

Files are always read in full and written once, in a single pass.
!*/
pub mod reader;
pub mod writer;

pub use reader::LineReader;
pub use writer::{TsvRecord, TsvWriter};
