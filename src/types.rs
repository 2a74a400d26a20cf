use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound invocation event. Only the query string parameters are consulted;
/// anything else the gateway sends along is ignored.
#[derive(Debug, Deserialize, Default)]
pub struct Event {
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: Option<Value>,
}

/// Untyped query parameters, as they arrive from the caller
#[derive(Debug, Deserialize, Default)]
pub struct QueryParameters {
    pub chromosome: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// A validated region: 0-based, half-open `[start, end)` on one chromosome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRegion {
    pub chromosome: String,
    pub start: u64,
    pub end: u64,
}

impl QueryRegion {
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The query as echoed back in a successful response
    pub fn echo(&self) -> Value {
        serde_json::json!({
            "chromosome": self.chromosome,
            "start": self.start,
            "end": self.end,
        })
    }
}

impl std::fmt::Display for QueryRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.chromosome, self.start, self.end)
    }
}

/// One variant record overlapping the queried region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub chrom: String,
    /// 1-based position
    pub pos: u64,
    #[serde(rename = "ref")]
    pub reference: String,
    /// Alternate alleles, comma separated
    #[serde(rename = "alt")]
    pub alternate: String,
}

/// Fixed-shape body returned for every request, success or failure
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    pub message: String,
    pub variants: Vec<Variant>,
    pub query: Value,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// Gateway-style response: status plus the serialized envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub version: String,
    pub format: String,
    #[serde(rename = "variantsFile")]
    pub variants_file: String,
}
