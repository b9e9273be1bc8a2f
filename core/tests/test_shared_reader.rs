// Mutex-guarded reader shared between threads.

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    use bom_core::{BomReader, Encoding, SharedBomReader};

    /// One byte per call; counts calls across threads.
    struct CountingReader {
        data: Cursor<Vec<u8>>,
        calls: Arc<AtomicUsize>,
    }

    impl Read for CountingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let n = buf.len().min(1);
            self.data.read(&mut buf[..n])
        }
    }

    #[test]
    fn concurrent_readers_detect_once_and_split_payload() {
        let mut data = vec![0xEF, 0xBB, 0xBF];
        data.extend((0..200u32).map(|i| b'a' + (i % 26) as u8));
        let calls = Arc::new(AtomicUsize::new(0));
        let source = CountingReader { data: Cursor::new(data.clone()), calls: calls.clone() };
        let shared = Arc::new(SharedBomReader::new(BomReader::new(source)));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    let mut got = Vec::new();
                    let mut buf = [0u8; 3];
                    loop {
                        let n = (&*shared).read(&mut buf).unwrap();
                        if n == 0 {
                            break;
                        }
                        assert_eq!(shared.encoding().unwrap(), Encoding::Utf8);
                        got.extend_from_slice(&buf[..n]);
                    }
                    got
                })
            })
            .collect();

        let mut total: Vec<u8> = Vec::new();
        for h in handles {
            total.extend(h.join().unwrap());
        }
        total.sort_unstable();

        let mut expected = data[3..].to_vec();
        expected.sort_unstable();
        assert_eq!(total, expected);

        let counters = shared.counters().unwrap();
        assert_eq!(counters.marker_bytes, 3);
        assert_eq!(counters.bytes_delivered, 200);
        assert_eq!(counters.source_reads as usize, calls.load(Ordering::SeqCst));
    }

    #[test]
    fn owned_shared_reader_reads_like_inner() {
        let mut shared: SharedBomReader<_> = BomReader::new(Cursor::new(vec![0xFE, 0xFF, 0x00, 0x41])).into();
        assert!(!shared.is_detected().unwrap());

        let mut out = Vec::new();
        shared.read_to_end(&mut out).unwrap();
        assert_eq!(out, vec![0x00, 0x41]);
        assert!(shared.is_detected().unwrap());

        let inner = shared.into_inner().unwrap();
        assert_eq!(inner.encoding(), Encoding::Utf16BigEndian);
    }

    #[test]
    fn zero_capacity_read_skips_detection() {
        let shared = SharedBomReader::new(BomReader::new(Cursor::new(vec![0xEF, 0xBB, 0xBF])));
        assert_eq!((&shared).read(&mut []).unwrap(), 0);
        assert!(!shared.is_detected().unwrap());
        assert_eq!(shared.encoding().unwrap(), Encoding::Unspecified);
    }
}
