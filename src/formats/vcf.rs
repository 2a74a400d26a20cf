use super::index_path;
use crate::types::{QueryRegion, Variant};
use crate::{Error, Result};
use noodles::core::{Position, Region};
use noodles::csi::{self, BinningIndex};
use noodles::tabix;
use noodles::vcf::{self, variant::record::AlternateBases};
use std::fs::File;
use std::io;
use std::path::Path;

type Reader = vcf::io::IndexedReader<noodles::bgzf::Reader<File>>;

pub struct VcfRegionReader;

impl VcfRegionReader {
    /// Fetch every record overlapping `region` from an indexed VCF.
    ///
    /// Records come back in the order the index yields them. The reader and
    /// its file handle are dropped before returning, on success or failure.
    pub fn fetch(vcf_path: &Path, region: &QueryRegion) -> Result<Vec<Variant>> {
        let mut reader = Self::open(vcf_path)?;

        let header = reader
            .read_header()
            .map_err(|e| Error::LookupFailed(format!("failed to read VCF header: {}", e)))?;

        // [start, end) with start == end overlaps nothing
        if region.is_empty() {
            return Ok(Vec::new());
        }

        let max_position = Self::max_position(reader.index());
        let Some(query_region) = Self::to_region(region, max_position) else {
            tracing::debug!(%region, %max_position, "region starts past the indexable range");
            return Ok(Vec::new());
        };

        let records = reader
            .query(&header, &query_region)
            .map_err(|e| Error::LookupFailed(format!("query {} failed: {}", region, e)))?;

        records
            .map(|result| {
                result
                    .and_then(|record| Self::to_variant(&record))
                    .map_err(|e| Error::LookupFailed(format!("failed to decode record: {}", e)))
            })
            .collect()
    }

    /// Open `vcf_path` with the index found next to it.
    fn open(vcf_path: &Path) -> Result<Reader> {
        let Some(index_path) = index_path(vcf_path) else {
            let reason = if vcf_path.exists() {
                "no tabix or CSI index found for"
            } else {
                "variant file not found:"
            };
            return Err(Error::LookupFailed(format!("{} {}", reason, vcf_path.display())));
        };

        let index_err = |e: io::Error| {
            Error::LookupFailed(format!(
                "failed to read index {}: {}",
                index_path.display(),
                e
            ))
        };

        let builder = vcf::io::indexed_reader::Builder::default();
        let builder = match index_path.extension().and_then(|ext| ext.to_str()) {
            Some("csi") => builder.set_index(csi::read(&index_path).map_err(index_err)?),
            _ => builder.set_index(tabix::read(&index_path).map_err(index_err)?),
        };

        builder.build_from_path(vcf_path).map_err(|e| {
            Error::LookupFailed(format!(
                "failed to open VCF file {}: {}",
                vcf_path.display(),
                e
            ))
        })
    }

    /// Largest position the index can address (2^29 - 1 for tabix).
    pub fn max_position(index: &dyn BinningIndex) -> Position {
        let bits = u32::from(index.min_shift()) + 3 * u32::from(index.depth());
        1usize
            .checked_shl(bits)
            .map(|n| n - 1)
            .and_then(Position::new)
            .unwrap_or(Position::MAX)
    }

    /// Convert a 0-based half-open region into noodles' 1-based closed one,
    /// clamping the end to `max_position`.
    ///
    /// Returns `None` when the region starts beyond `max_position`, where no
    /// record can be indexed.
    pub fn to_region(region: &QueryRegion, max_position: Position) -> Option<Region> {
        let start = usize::try_from(region.start)
            .ok()
            .and_then(|s| s.checked_add(1))
            .and_then(Position::new)
            .filter(|start| *start <= max_position)?;

        let end = usize::try_from(region.end)
            .ok()
            .and_then(Position::new)
            .map_or(max_position, |end| end.min(max_position));

        Some(Region::new(region.chromosome.clone(), start..=end))
    }

    fn to_variant(record: &vcf::Record) -> io::Result<Variant> {
        let pos = record
            .variant_start()
            .transpose()?
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "missing position"))?;

        let alternate = record
            .alternate_bases()
            .iter()
            .collect::<io::Result<Vec<_>>>()?
            .join(",");

        Ok(Variant {
            chrom: record.reference_sequence_name().to_string(),
            pos: pos.get() as u64,
            reference: record.reference_bases().to_string(),
            alternate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(start: u64, end: u64) -> QueryRegion {
        QueryRegion {
            chromosome: "chr1".to_string(),
            start,
            end,
        }
    }

    fn tabix_max() -> Position {
        Position::new(536_870_911).unwrap()
    }

    #[test]
    fn test_max_position_of_tabix_index() {
        let index = tabix::Index::default();
        assert_eq!(VcfRegionReader::max_position(&index), tabix_max());
    }

    #[test]
    fn test_to_region_shifts_start() {
        let r = VcfRegionReader::to_region(&region(100000, 101000), tabix_max()).unwrap();
        assert_eq!(r.to_string(), "chr1:100001-101000");
    }

    #[test]
    fn test_to_region_from_zero() {
        let r = VcfRegionReader::to_region(&region(0, 1), tabix_max()).unwrap();
        assert_eq!(r.to_string(), "chr1:1-1");
    }

    #[test]
    fn test_to_region_clamps_large_end() {
        let r = VcfRegionReader::to_region(&region(0, 99_999_999_999), tabix_max()).unwrap();
        assert_eq!(r.to_string(), "chr1:1-536870911");
    }

    #[test]
    fn test_to_region_past_indexable_range() {
        let r = VcfRegionReader::to_region(&region(600_000_000, 600_000_100), tabix_max());
        assert!(r.is_none());
    }

    #[test]
    fn test_fetch_without_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unindexed.vcf.gz");
        std::fs::write(&path, b"##fileformat=VCFv4.3\n").unwrap();

        let err = VcfRegionReader::fetch(&path, &region(0, 10)).unwrap_err();
        match err {
            Error::LookupFailed(msg) => assert!(msg.contains("index")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_fetch_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.vcf.gz");

        match VcfRegionReader::fetch(&path, &region(0, 10)).unwrap_err() {
            Error::LookupFailed(msg) => assert!(msg.contains("not found")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_fetch_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.vcf.gz");
        std::fs::write(&path, b"not bgzf data").unwrap();
        std::fs::write(dir.path().join("corrupt.vcf.gz.tbi"), b"not an index").unwrap();

        let err = VcfRegionReader::fetch(&path, &region(0, 10)).unwrap_err();
        assert!(matches!(err, Error::LookupFailed(_)));
    }
}
