use super::VariantSource;
use crate::formats::VcfRegionReader;
use crate::types::{QueryRegion, Variant};
use crate::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct LocalVariantFile {
    data_dir: PathBuf,
    path: PathBuf,
}

impl LocalVariantFile {
    pub fn new(data_dir: PathBuf, file_name: String) -> Self {
        let path = data_dir.join(file_name);
        Self { data_dir, path }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[async_trait]
impl VariantSource for LocalVariantFile {
    async fn fetch(&self, region: &QueryRegion) -> Result<Vec<Variant>> {
        let path = self.path.clone();
        let region = region.clone();

        // noodles readers are blocking
        tokio::task::spawn_blocking(move || VcfRegionReader::fetch(&path, &region))
            .await
            .map_err(|e| Error::LookupFailed(format!("read task failed: {}", e)))?
    }

    fn location(&self) -> &Path {
        &self.path
    }

    async fn data_dir_listing(&self) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.data_dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}
