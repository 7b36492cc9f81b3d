use std::io::{self, ErrorKind, Read};

/// Prefix kept by [`identify_unknown`](crate::domain::services::unknown_fallback) when
/// deciding between text and binary
pub const SNIFF_SIZE: usize = 128;

/// Demand-driven read-ahead over a byte stream
///
/// The buffer only ever grows to the largest length requested so far. Bytes already
/// buffered are never read again, and a failed or short read keeps whatever it got.
/// The stream is borrowed or owned by the caller's choice; it is never closed or
/// repositioned here.
pub struct BufferedSource<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: Read> BufferedSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }

    /// Makes sure at least `length` bytes are buffered
    ///
    /// Only the missing delta is read. Returns [`ErrorKind::UnexpectedEof`] if the stream
    /// ended first, or the underlying error if a read failed; in both cases the bytes
    /// obtained so far stay in the buffer.
    pub fn ensure_available(&mut self, length: usize) -> io::Result<()> {
        let filled = self.buffer.len();
        if filled >= length {
            return Ok(());
        }

        // grows with the data that actually arrives; read_to_end retries Interrupted
        let delta = (length - filled) as u64;
        (&mut self.reader).take(delta).read_to_end(&mut self.buffer)?;

        if self.buffer.len() < length {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                format!("stream ended after {} of {length} bytes", self.buffer.len()),
            ));
        }

        Ok(())
    }

    /// Best-effort [`ensure_available`](Self::ensure_available) for callers that work with
    /// whatever is there
    pub fn maybe_buffer(&mut self, length: usize) {
        if let Err(e) = self.ensure_available(length) {
            tracing::trace!(length, buffered = self.buffer.len(), "short read: {e}");
        }
    }

    /// The buffered prefix, which may be shorter than any length requested
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hands out at most `chunk` bytes per read
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        chunk: usize,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = buf.len().min(self.chunk).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    /// Yields its data once, then fails every read
    struct Failing {
        data: Option<Vec<u8>>,
    }

    impl Read for Failing {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.take() {
                Some(data) => {
                    let n = data.len().min(buf.len());
                    buf[..n].copy_from_slice(&data[..n]);
                    Ok(n)
                }
                None => Err(io::Error::other("device unplugged")),
            }
        }
    }

    #[test]
    fn test_grows_on_demand() {
        let mut source = BufferedSource::new(Cursor::new(b"0123456789".to_vec()));
        assert!(source.is_empty());

        source.ensure_available(4).unwrap();
        assert_eq!(source.data(), b"0123");

        source.ensure_available(2).unwrap();
        assert_eq!(source.data(), b"0123");

        source.ensure_available(8).unwrap();
        assert_eq!(source.data(), b"01234567");
    }

    #[test]
    fn test_short_stream_keeps_partial_data() {
        let mut source = BufferedSource::new(Cursor::new(b"abc".to_vec()));
        let err = source.ensure_available(8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert_eq!(source.data(), b"abc");
    }

    #[test]
    fn test_reads_only_the_delta() {
        let trickle = Trickle {
            data: (0..32).collect(),
            pos: 0,
            chunk: 3,
        };
        let mut source = BufferedSource::new(trickle);

        source.ensure_available(6).unwrap();
        assert_eq!(source.len(), 6);
        source.ensure_available(12).unwrap();
        assert_eq!(source.data(), &(0..12).collect::<Vec<u8>>()[..]);

        let trickle = source.into_inner();
        assert_eq!(trickle.pos, 12);
    }

    #[test]
    fn test_io_error_keeps_previous_bytes() {
        let mut source = BufferedSource::new(Failing {
            data: Some(b"RIFF".to_vec()),
        });

        let err = source.ensure_available(12).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(source.data(), b"RIFF");

        source.maybe_buffer(64);
        assert_eq!(source.data(), b"RIFF");
    }

    #[test]
    fn test_maybe_buffer_on_empty_stream() {
        let mut source = BufferedSource::new(io::empty());
        source.maybe_buffer(SNIFF_SIZE);
        assert!(source.is_empty());
    }

    #[test]
    fn test_far_request_on_short_stream() {
        let mut source = BufferedSource::new(Cursor::new(b"hello".to_vec()));
        source.maybe_buffer(usize::MAX);
        assert_eq!(source.data(), b"hello");
        assert!(source.buffer.capacity() < 1 << 20);
    }

    #[test]
    fn test_interrupted_reads_are_retried() {
        struct Flaky {
            interrupted: bool,
            data: Cursor<Vec<u8>>,
        }

        impl Read for Flaky {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                self.interrupted = !self.interrupted;
                if self.interrupted {
                    return Err(io::Error::from(ErrorKind::Interrupted));
                }
                self.data.read(buf)
            }
        }

        let mut source = BufferedSource::new(Flaky {
            interrupted: false,
            data: Cursor::new(b"GIF89a".to_vec()),
        });
        source.ensure_available(6).unwrap();
        assert_eq!(source.data(), b"GIF89a");
    }
}
