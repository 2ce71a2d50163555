/*!
# Tab separated writing

[TsvWriter] writes any [TsvRecord] as a single line, fields separated by tabs.

Fields are written verbatim: no quoting and no escaping of embedded tabs or newlines.
!*/
mod tsvwriter;
mod writertrait;

pub use tsvwriter::TsvWriter;
pub use writertrait::TsvRecord;
