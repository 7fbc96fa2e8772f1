use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// HardwareSpec — Miner hashrate and power draw, without a purchase price
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareSpec {
    pub hashrate_ths: f64,
    pub power_watts: f64,
}

impl HardwareSpec {
    pub fn new(hashrate_ths: f64, power_watts: f64) -> Self {
        Self {
            hashrate_ths,
            power_watts,
        }
    }

    /// Energy efficiency in J/TH, derived from the current hashrate/power pair.
    ///
    /// Returns 0 when the hashrate is not positive.
    pub fn efficiency(&self) -> f64 {
        if self.hashrate_ths > 0.0 {
            self.power_watts / self.hashrate_ths
        } else {
            0.0
        }
    }

    /// Attach a purchase price, producing a full [`MinerSpec`].
    pub fn with_price(self, price: f64) -> MinerSpec {
        MinerSpec {
            hardware: self,
            price,
        }
    }
}

// ---------------------------------------------------------------------------
// MinerSpec — Hardware plus acquisition price
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinerSpec {
    #[serde(flatten)]
    pub hardware: HardwareSpec,
    pub price: f64,
}

impl MinerSpec {
    pub fn new(hashrate_ths: f64, power_watts: f64, price: f64) -> Self {
        HardwareSpec::new(hashrate_ths, power_watts).with_price(price)
    }

    pub fn hashrate_ths(&self) -> f64 {
        self.hardware.hashrate_ths
    }

    pub fn power_watts(&self) -> f64 {
        self.hardware.power_watts
    }

    pub fn efficiency(&self) -> f64 {
        self.hardware.efficiency()
    }
}
