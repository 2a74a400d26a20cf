//! Variant source abstraction.
//!
//! A [`VariantSource`] is anything that can answer an overlap fetch for a
//! [`QueryRegion`]. The service talks to the source through this trait so
//! the format library stays behind one seam and tests can substitute an
//! in-memory source.
//!
//! # Implementations
//!
//! - [`LocalVariantFile`] - indexed VCF in a local data directory
//!
//! # Example
//!
//! ```no_run
//! use vcfquery::storage::{LocalVariantFile, VariantSource};
//! use std::path::PathBuf;
//!
//! let source = LocalVariantFile::new(
//!     PathBuf::from("/data"),
//!     "GATK_variants.vcf.gz".to_string(),
//! );
//! assert!(source.location().ends_with("GATK_variants.vcf.gz"));
//! ```

mod local;

pub use local::LocalVariantFile;

use crate::Result;
use crate::types::{QueryRegion, Variant};
use async_trait::async_trait;
use std::path::Path;

/// Source of variant records for region queries
#[async_trait]
pub trait VariantSource: Send + Sync {
    /// Fetch all records overlapping `region`, in source order
    async fn fetch(&self, region: &QueryRegion) -> Result<Vec<Variant>>;

    /// Where the records are read from, for logging
    fn location(&self) -> &Path;

    /// Entries of the directory holding the variant file, for diagnostics
    async fn data_dir_listing(&self) -> Result<Vec<String>>;
}
