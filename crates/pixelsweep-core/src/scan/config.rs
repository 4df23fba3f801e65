use serde::{Deserialize, Serialize};

/// Classification policy applied uniformly to every channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Flag negative samples as illegal. NaN and infinities are always illegal.
    #[serde(default = "default_reject_negative")]
    pub reject_negative: bool,
}

fn default_reject_negative() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            reject_negative: default_reject_negative(),
        }
    }
}

impl ScanConfig {
    /// Only NaN and infinities are illegal.
    pub fn non_finite_only() -> Self {
        Self {
            reject_negative: false,
        }
    }
}
