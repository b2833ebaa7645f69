use serde::{Deserialize, Serialize};

/// A worker on an op's roster. Everything except `id` is display data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub ops_completed: u32,
    /// Fraction in 0.0..=1.0
    #[serde(default)]
    pub reliability: f64,
    #[serde(default)]
    pub endorsements: Vec<String>,
}

impl Operator {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn reliability_percent(&self) -> i64 {
        (self.reliability * 100.0).round() as i64
    }
}
