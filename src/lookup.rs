use crate::storage::VariantSource;
use crate::types::{QueryRegion, Variant};
use crate::{Error, Result};

/// Look up the variants overlapping `region` in `source`.
///
/// Every failure comes back as [`Error::LookupFailed`](crate::Error::LookupFailed);
/// an empty result is a success.
pub async fn lookup_variants(
    source: &dyn VariantSource,
    region: &QueryRegion,
) -> Result<Vec<Variant>> {
    match source.data_dir_listing().await {
        Ok(entries) => tracing::info!(?entries, "data directory contents"),
        Err(e) => tracing::warn!("could not list data directory: {}", e),
    }

    tracing::info!(
        path = %source.location().display(),
        chromosome = %region.chromosome,
        start = region.start,
        end = region.end,
        "processing variant file"
    );

    match source.fetch(region).await {
        Ok(variants) => {
            tracing::debug!(count = variants.len(), "lookup complete");
            Ok(variants)
        }
        Err(e) => {
            tracing::error!(
                path = %source.location().display(),
                "error processing variant file: {}",
                e
            );
            match e {
                Error::LookupFailed(_) => Err(e),
                other => Err(Error::LookupFailed(other.to_string())),
            }
        }
    }
}
