//! Radio parameter recommender interface (interface only)
//!
//! Advisory collaborator: given a finished packet length, suggest LoRa-style
//! link parameters trading airtime for range. Never consulted for codec
//! correctness.

use serde::{Deserialize, Serialize};

/// Suggested link parameters for transmitting a packet of a given size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkRecommendation {
    /// Spreading factor (7-12; higher is slower but longer range)
    pub spreading_factor: u8,
    /// Channel bandwidth in Hz
    pub bandwidth_hz: u32,
    /// Coding rate denominator x in 4/x (5-8)
    pub coding_rate: u8,
    /// Estimated usable range in meters
    pub estimated_range_m: f64,
    /// Estimated time on air in milliseconds
    pub airtime_ms: f64,
}

/// Trait for the external radio parameter recommender
pub trait RadioAdvisor {
    /// Recommend link parameters for a packet of `packet_len` bytes
    fn recommend(&self, packet_len: usize) -> LinkRecommendation;
}
