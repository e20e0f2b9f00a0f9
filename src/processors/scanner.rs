//! Single-partition scan loop.

use crate::error::Result;
use crate::models::table::AggregateTable;
use crate::models::temperature::decode_tenths;
use crate::utils::constants::{DELIMITER, EOL, FNV1A_OFFSET, FNV1A_PRIME};

/// Scan one partition's bytes into `table`.
///
/// Walks the partition record by record: the station name is bounded by the
/// next `;`, with its FNV-1a hash computed in the same pass so the name
/// bytes are touched exactly once; the temperature field is bounded by the
/// next line terminator or the end of the partition (the final record may
/// omit its trailing newline). Only read-only access to `data`; the name
/// is copied nowhere except into the table on first sight of a station.
pub fn scan_partition(data: &[u8], table: &mut AggregateTable) -> Result<()> {
    let mut pos = 0;
    while pos < data.len() {
        let name_start = pos;
        let mut hash = FNV1A_OFFSET;
        while data[pos] != DELIMITER {
            hash = (hash ^ data[pos] as u64).wrapping_mul(FNV1A_PRIME);
            pos += 1;
        }
        let name = &data[name_start..pos];
        pos += 1;

        let field_start = pos;
        while pos < data.len() && data[pos] != EOL {
            pos += 1;
        }
        let value = decode_tenths(&data[field_start..pos]);
        table.observe(name, hash, value)?;

        pos += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::table::fnv1a_hash;
    use crate::models::StationAggregate;

    fn scan(data: &[u8]) -> AggregateTable {
        let mut table = AggregateTable::new(true);
        scan_partition(data, &mut table).unwrap();
        table
    }

    fn lookup(table: &AggregateTable, name: &[u8]) -> Option<StationAggregate> {
        table
            .entries()
            .find(|(key, _)| *key == name)
            .map(|(_, agg)| *agg)
    }

    #[test]
    fn test_scan_basic_records() {
        let table = scan(b"A;1.0\nB;-2.5\nA;3.0\n");

        assert_eq!(table.len(), 2);
        let a = lookup(&table, b"A").unwrap();
        assert_eq!((a.min, a.max, a.sum, a.count), (10, 30, 40, 2));
        let b = lookup(&table, b"B").unwrap();
        assert_eq!((b.min, b.max, b.sum, b.count), (-25, -25, -25, 1));
    }

    #[test]
    fn test_scan_final_record_without_newline() {
        let table = scan(b"Dublin;12.3\nDublin;-0.1");
        let agg = lookup(&table, b"Dublin").unwrap();
        assert_eq!(agg.count, 2);
        assert_eq!(agg.sum, 122);
    }

    #[test]
    fn test_scan_multibyte_names() {
        let table = scan("Zürich;5.5\nSão Paulo;31.0\n".as_bytes());
        assert_eq!(table.len(), 2);
        assert_eq!(lookup(&table, "Zürich".as_bytes()).unwrap().sum, 55);
        assert_eq!(lookup(&table, "São Paulo".as_bytes()).unwrap().sum, 310);
    }

    #[test]
    fn test_incremental_hash_matches_whole_name_hash() {
        let table = scan(b"Jakarta;20.0\n");
        let mut probe = AggregateTable::new(true);
        probe
            .observe(b"Jakarta", fnv1a_hash(b"Jakarta"), 150)
            .unwrap();
        probe.merge(&table).unwrap();
        // A hash mismatch would surface as two entries for one name.
        assert_eq!(probe.len(), 1);
        assert_eq!(lookup(&probe, b"Jakarta").unwrap().count, 2);
    }

    #[test]
    fn test_scan_empty_partition() {
        assert_eq!(scan(b"").len(), 0);
    }
}
