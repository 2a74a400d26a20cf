use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vcfquery")]
#[command(about = "Region queries against an indexed VCF file")]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "VCFQUERY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "VCFQUERY_PORT", default_value = "8080")]
    pub port: u16,

    /// Directory containing the variant file
    #[arg(long, env = "VCFQUERY_DATA_DIR", default_value = "/data")]
    pub data_dir: PathBuf,

    /// Name of the bgzipped, indexed VCF inside the data directory
    #[arg(long, env = "VCFQUERY_VARIANTS_FILE", default_value = "GATK_variants.vcf.gz")]
    pub variants_file: String,

    /// Enable CORS for all origins
    #[arg(long, env = "VCFQUERY_CORS", default_value = "true")]
    pub cors: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn variants_path(&self) -> PathBuf {
        self.data_dir.join(&self.variants_file)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
