use std::{fs::File, io::Write, path::Path};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Error;

use super::TsvRecord;

/// Writes [TsvRecord]s, one per line.
pub struct TsvWriter<W: Write> {
    inner: csv::Writer<W>,
    nb_records: usize,
}

impl TsvWriter<File> {
    /// Create (or truncate) the file at `dst`.
    pub fn create(dst: &Path) -> Result<Self, Error> {
        let file = File::create(dst)?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> TsvWriter<W> {
    pub fn from_writer(w: W) -> Self {
        let inner = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(w);
        Self {
            inner,
            nb_records: 0,
        }
    }

    pub fn write_single<R: TsvRecord>(&mut self, record: &R) -> Result<(), Error> {
        self.inner.write_record(record.fields())?;
        self.nb_records += 1;
        Ok(())
    }

    pub fn write<'a, R, I>(&mut self, records: I) -> Result<(), Error>
    where
        R: TsvRecord + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        for record in records {
            self.write_single(record)?;
        }
        Ok(())
    }

    /// Number of records written so far.
    pub fn nb_records(&self) -> usize {
        self.nb_records
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and get back the inner writer.
    pub fn into_inner(self) -> Result<W, Error> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::TsvWriter;
    use crate::types::{AlignmentPair, Triple};

    #[test]
    fn test_write_pairs() {
        let pairs = vec![
            AlignmentPair::new("a1", "b1"),
            AlignmentPair::new("a2", "b2"),
        ];
        let mut w = TsvWriter::from_writer(Vec::new());
        w.write(&pairs).unwrap();
        assert_eq!(w.nb_records(), 2);

        let buf = w.into_inner().unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a1\tb1\na2\tb2\n");
    }

    #[test]
    fn test_write_no_quoting() {
        let t = Triple::new("ent:x", "name", "\"Jean, dit \"le grand\"\"");
        let mut w = TsvWriter::from_writer(Vec::new());
        w.write_single(&t).unwrap();

        let buf = w.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "ent:x\tname\t\"Jean, dit \"le grand\"\"\n"
        );
    }

    #[test]
    fn test_write_empty() {
        let w = TsvWriter::from_writer(Vec::new());
        assert!(w.into_inner().unwrap().is_empty());
    }
}
