//! Variant file readers backed by noodles.
//!
//! The heavy lifting (BGZF decompression, tabix/CSI traversal, record
//! decoding) happens inside noodles; the readers here only translate between
//! a [`QueryRegion`](crate::types::QueryRegion) and noodles' region types and
//! shape decoded records into [`Variant`](crate::types::Variant)s.
//!
//! # Supported Formats
//!
//! - [`VcfRegionReader`] - bgzip-compressed VCF with a `.tbi` or `.csi` index

mod vcf;

pub use vcf::VcfRegionReader;

use std::path::{Path, PathBuf};

/// Index extensions looked up next to a data file, in order of preference
pub const INDEX_EXTENSIONS: [&str; 2] = ["tbi", "csi"];

/// Locate the index for `path`, checking both the appended
/// (`file.vcf.gz.tbi`) and the replaced (`file.vcf.tbi`) conventions.
pub fn index_path(path: &Path) -> Option<PathBuf> {
    for ext in INDEX_EXTENSIONS {
        let appended = PathBuf::from(format!("{}.{}", path.display(), ext));
        if appended.exists() {
            return Some(appended);
        }

        let replaced = path.with_extension(ext);
        if replaced.exists() {
            return Some(replaced);
        }
    }
    None
}
