use std::io::{self, Read};

/// Size of each read while draining a response.
pub(crate) const CHUNK_SIZE: usize = 1024;

/**
 * Iterators to emulate control loops for Read
 */

/// Yields the length of every successful read into `d`, ending at the first
/// zero-length read (EOF). Interrupted reads are retried.
pub struct ReadIterator<'a, R> {
    r: &'a mut R,
    d: &'a mut [u8],
}

impl<'a, R> ReadIterator<'a, R>
where
    R: Read,
{
    pub fn new(r: &'a mut R, d: &'a mut [u8]) -> Self {
        ReadIterator { r, d }
    }
}

impl<'a, R> Iterator for ReadIterator<'a, R>
where
    R: Read,
{
    type Item = io::Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.r.read(self.d) {
                Ok(0) => return None,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                v => return Some(v),
            }
        }
    }
}

/// Read `reader` until the peer closes, `CHUNK_SIZE` bytes at a time.
pub(crate) fn read_to_close(reader: &mut impl Read) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut iter = ReadIterator::new(reader, &mut chunk);
    while let Some(n) = iter.next() {
        let n = n?;
        out.extend_from_slice(&iter.d[..n]);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hands out at most `step` bytes per read and fails once if asked.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        step: usize,
        interrupt_once: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupt_once {
                self.interrupt_once = false;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            let n = self.step.min(buf.len()).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn reads_across_many_chunks() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        let mut r = Cursor::new(data.clone());
        assert_eq!(read_to_close(&mut r).unwrap(), data);
    }

    #[test]
    fn short_reads_and_interrupts_are_tolerated() {
        let mut r = Trickle {
            data: b"HTTP/1.1 200 OK\r\n\r\nhi".to_vec(),
            pos: 0,
            step: 3,
            interrupt_once: true,
        };
        assert_eq!(read_to_close(&mut r).unwrap(), b"HTTP/1.1 200 OK\r\n\r\nhi");
    }

    #[test]
    fn empty_stream_is_empty() {
        let mut r = Cursor::new(Vec::new());
        assert!(read_to_close(&mut r).unwrap().is_empty());
    }

    #[test]
    fn chunks_never_exceed_chunk_size() {
        let mut r = Cursor::new(vec![7u8; CHUNK_SIZE * 3 + 1]);
        let mut buf = [0u8; CHUNK_SIZE];
        let sizes: Vec<usize> = ReadIterator::new(&mut r, &mut buf)
            .map(|n| n.unwrap())
            .collect();
        assert_eq!(sizes, vec![CHUNK_SIZE, CHUNK_SIZE, CHUNK_SIZE, 1]);
    }
}
