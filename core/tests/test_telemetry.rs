#[cfg(test)]
mod reader_counter_tests {
    use std::io::{Cursor, Read};

    use bom_core::telemetry::ReaderCounters;
    use bom_core::{BomError, BomReader, ReaderConfig};

    fn make_counters() -> ReaderCounters {
        ReaderCounters {
            source_reads: 3,
            lookahead_bytes: 4,
            marker_bytes: 2,
            zero_progress_retries: 1,
            bytes_delivered: 10,
        }
    }

    #[test]
    fn merge_and_add_assign_agree() {
        let mut a = make_counters();
        a.merge(&make_counters());

        let mut b = make_counters();
        b += make_counters();

        assert_eq!(a, b);
        assert_eq!(a.source_reads, 6);
        assert_eq!(a.bytes_delivered, 20);
    }

    #[test]
    fn snapshot_bytes_decode_to_same_counters() {
        let counters = make_counters();
        let bytes = counters.to_bytes().unwrap();
        assert_eq!(ReaderCounters::from_bytes(&bytes).unwrap(), counters);
    }

    #[test]
    fn truncated_snapshot_is_rejected() {
        let bytes = make_counters().to_bytes().unwrap();
        let err = ReaderCounters::from_bytes(&bytes[..1]).unwrap_err();
        assert!(matches!(err, BomError::Snapshot(_)));
    }

    #[test]
    fn reader_counts_full_stream() {
        let mut data = vec![0xEF, 0xBB, 0xBF];
        data.extend_from_slice(b"payload");
        let mut rd = BomReader::new(Cursor::new(data));
        let mut out = Vec::new();
        rd.read_to_end(&mut out).unwrap();

        let c = rd.counters();
        assert_eq!(c.lookahead_bytes, 4);
        assert_eq!(c.marker_bytes, 3);
        assert_eq!(c.bytes_delivered, 7);
        assert_eq!(c.zero_progress_retries, 0);
    }

    #[test]
    fn config_defaults_and_serde() {
        let config = ReaderConfig::default();
        assert_eq!(config.max_zero_progress_reads, 100);

        let tuned = ReaderConfig::new().with_max_zero_progress_reads(7);
        let bytes = bincode::serde::encode_to_vec(&tuned, bincode::config::standard()).unwrap();
        let (decoded, _): (ReaderConfig, usize) =
            bincode::serde::decode_from_slice(&bytes, bincode::config::standard()).unwrap();
        assert_eq!(decoded, tuned);
    }
}
