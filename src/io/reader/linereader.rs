/*! Line reading

[LineReader] wraps a buffered reader and yields lines without their terminator.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::{Path, PathBuf},
};

use crate::error::Error;

/// Reader that yields newline separated lines of a file.
#[derive(Debug)]
pub struct LineReader<T> {
    path: PathBuf,
    lines: Lines<BufReader<T>>,
}

impl LineReader<File> {
    pub fn new(src: &Path) -> Result<Self, Error> {
        let handler = File::open(src)?;
        Ok(Self::from_reader(src, handler))
    }
}

impl<T: Read> LineReader<T> {
    /// Build a reader over any [Read], `path` being only used for reporting.
    pub fn from_reader(path: &Path, inner: T) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: BufReader::new(inner).lines(),
        }
    }
}

impl<T> LineReader<T> {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> Iterator for LineReader<T>
where
    T: Read,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| line.map_err(Error::Io))
    }
}
