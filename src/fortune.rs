/***************************************/
/*            F O R T U N E S          */
/***************************************/

// A flat text file of fortunes, one per line. Each line starts with a
// two character marker which is not shown on the marquee.
// The file is re-scanned from the start for every lookup, so nothing
// but the open handle and the line count is kept in memory.

use std::io::{BufRead, BufReader, Seek, SeekFrom};

use rand::Rng;
use tracing::debug;

use crate::config;
use crate::error::MarqueeError;

pub struct FortuneFile<R = std::fs::File>
{
    /// Where the fortunes come from, for error reporting.
    name       : String,

    reader     : BufReader<R>,

    /// Number of lines counted when the file was opened.
    line_count : usize,
}

impl FortuneFile<std::fs::File>
{
    /// Open a fortune file and count its lines.
    pub fn open (path: &str) -> Result<Self, MarqueeError>
    {
        let file = std::fs::OpenOptions::new ()
            .read (true)
            .open (path)?;

        Self::from_reader (path, file)
    }
}

impl<R: std::io::Read + Seek> FortuneFile<R>
{
    pub fn from_reader (name: &str, inner: R) -> Result<Self, MarqueeError>
    {
        let mut reader = BufReader::new (inner);
        let line_count = count_lines (&mut reader)?;

        if line_count == 0
        {
            return Err (MarqueeError::EmptyFortuneFile (name.to_string ()));
        }

        Ok (Self { name: name.to_string (), reader, line_count })
    }

    pub fn name (&self) -> &str
    {
        &self.name
    }

    pub fn line_count (&self) -> usize
    {
        self.line_count
    }

    /// Raw content of the line at `index` (zero based), trailing newline included.
    pub fn raw_line (&mut self, index: usize) -> Result<String, MarqueeError>
    {
        if index >= self.line_count
        {
            return Err (MarqueeError::LineOutOfRange { name: self.name.clone (), index, count: self.line_count });
        }

        self.reader.seek (SeekFrom::Start (0))?;

        let mut line = String::new ();
        for _ in 0..=index
        {
            line.clear ();
            if self.reader.read_line (&mut line)? == 0
            {
                // The file shrank since it was counted.
                return Err (MarqueeError::LineOutOfRange { name: self.name.clone (), index, count: self.line_count });
            }
        }

        Ok (line)
    }

    /// The fortune at `index`, ready for display.
    pub fn fortune (&mut self, index: usize) -> Result<String, MarqueeError>
    {
        let raw = self.raw_line (index)?;
        Ok (chop_line (&raw))
    }

    /// Pick a random line index in [0, line_count).
    pub fn pick_index<G: Rng + ?Sized> (&self, rng: &mut G) -> usize
    {
        let index = rng.random_range (0..self.line_count);
        debug! (index, line_count = self.line_count, "picked fortune line");
        index
    }
}

fn count_lines<R: BufRead + Seek> (reader: &mut R) -> Result<usize, MarqueeError>
{
    reader.seek (SeekFrom::Start (0))?;

    let mut lines = 0;
    let mut buf = Vec::new ();
    while reader.read_until (b'\n', &mut buf)? > 0
    {
        lines += 1;
        buf.clear ();
    }

    Ok (lines)
}

/// Strip trailing whitespace, then the line marker.
pub fn chop_line (raw: &str) -> String
{
    raw.trim_end ()
        .chars ()
        .skip (config::FORTUNE_PREFIX_CHARS)
        .collect ()
}

#[cfg(test)]
mod tests
{
    use super::*;
    use std::io::{Cursor, Write};

    fn fruit () -> FortuneFile<Cursor<Vec<u8>>>
    {
        FortuneFile::from_reader ("fruit", Cursor::new (b"1 apple\n2 banana\n3 cherry\n".to_vec ()))
            .unwrap ()
    }

    #[test]
    fn counts_lines ()
    {
        assert_eq! (fruit ().line_count (), 3);

        // A last line without a newline still counts.
        let f = FortuneFile::from_reader ("x", Cursor::new (b"% a\n% b".to_vec ())).unwrap ();
        assert_eq! (f.line_count (), 2);
    }

    #[test]
    fn selects_by_index ()
    {
        let mut f = fruit ();
        assert_eq! (f.fortune (1).unwrap (), "banana");
        assert_eq! (f.fortune (0).unwrap (), "apple");
        assert_eq! (f.fortune (2).unwrap (), "cherry");
        // Lookups are independent of each other.
        assert_eq! (f.fortune (1).unwrap (), "banana");
    }

    #[test]
    fn out_of_range_is_an_error ()
    {
        let mut f = fruit ();
        let err = f.fortune (3).err ().unwrap ();
        assert! (matches! (err, MarqueeError::LineOutOfRange { ref name, index: 3, count: 3 } if name == "fruit"));
        assert_eq! (err.to_string (), "line 3 requested but fortune file fruit only has 3 lines");
    }

    #[test]
    fn empty_file_is_rejected ()
    {
        let err = FortuneFile::from_reader ("empty", Cursor::new (Vec::<u8>::new ())).err ().unwrap ();
        assert! (matches! (err, MarqueeError::EmptyFortuneFile (ref name) if name == "empty"));
    }

    #[test]
    fn chop_strips_marker_and_trailing_whitespace ()
    {
        assert_eq! (chop_line ("% Hello there.  \r\n"), "Hello there.");
        assert_eq! (chop_line ("%"), "");
        assert_eq! (chop_line ("é ünïcode\n"), "ünïcode");
    }

    #[test]
    fn five_line_file_any_index ()
    {
        let mut tmp = tempfile::NamedTempFile::new ().unwrap ();
        for i in 0..5
        {
            writeln! (tmp, "{} fortune number {}   ", i, i).unwrap ();
        }
        tmp.flush ().unwrap ();

        let mut f = FortuneFile::open (tmp.path ().to_str ().unwrap ()).unwrap ();
        assert_eq! (f.line_count (), 5);

        let mut rng = rand::rng ();
        for _ in 0..20
        {
            let index = f.pick_index (&mut rng);
            assert! (index < 5);
            assert_eq! (f.fortune (index).unwrap (), format! ("fortune number {}", index));
        }
    }

    #[test]
    fn missing_file_is_an_io_error ()
    {
        let dir = tempfile::tempdir ().unwrap ();
        let path = dir.path ().join ("nope.txt");
        let err = FortuneFile::open (path.to_str ().unwrap ()).err ().unwrap ();
        assert! (matches! (err, MarqueeError::Io (_)));
    }
}
