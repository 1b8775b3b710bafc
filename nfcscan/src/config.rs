// nfcscan/src/config.rs

use std::ops::RangeInclusive;

use crate::constants::{
    DEFAULT_BALANCE_CURRENCY, DEFAULT_CANDIDATE_AIDS, DEFAULT_FIRST_SFI, DEFAULT_LAST_SFI,
    DEFAULT_MIFARE_BLOCK, MAX_SFI,
};
use crate::types::Aid;
use crate::{Error, Result};

/// Tunables for one scan session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    candidate_aids: Vec<Aid>,
    first_sfi: u8,
    last_sfi: u8,
    mifare_block: u8,
    balance_currency: String,
    unwrap_record_template: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            candidate_aids: DEFAULT_CANDIDATE_AIDS.to_vec(),
            first_sfi: DEFAULT_FIRST_SFI,
            last_sfi: DEFAULT_LAST_SFI,
            mifare_block: DEFAULT_MIFARE_BLOCK,
            balance_currency: DEFAULT_BALANCE_CURRENCY.to_string(),
            unwrap_record_template: false,
        }
    }
}

impl ScanConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::new()
    }

    /// AIDs tried with SELECT after PPSE, in order.
    pub fn candidate_aids(&self) -> &[Aid] {
        &self.candidate_aids
    }

    /// SFIs probed with READ RECORD (record 1 of each).
    pub fn sfi_range(&self) -> RangeInclusive<u8> {
        self.first_sfi..=self.last_sfi
    }

    /// MIFARE Classic block read for the transit heuristic.
    pub fn mifare_block(&self) -> u8 {
        self.mifare_block
    }

    /// Currency label used in the balance estimate.
    pub fn balance_currency(&self) -> &str {
        &self.balance_currency
    }

    /// Whether Track 2 is also looked up inside a record template (tag 70)
    /// when the record has no top-level tag 57. Off by default.
    pub fn unwrap_record_template(&self) -> bool {
        self.unwrap_record_template
    }
}

/// Consuming builder for [`ScanConfig`], starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct ScanConfigBuilder {
    config: ScanConfig,
}

impl ScanConfigBuilder {
    /// Builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidate AID list.
    pub fn candidate_aids(mut self, aids: impl IntoIterator<Item = Aid>) -> Self {
        self.config.candidate_aids = aids.into_iter().collect();
        self
    }

    /// Probe record 1 of SFIs `first..=last`.
    pub fn sfi_range(mut self, first: u8, last: u8) -> Self {
        self.config.first_sfi = first;
        self.config.last_sfi = last;
        self
    }

    /// Block read by the MIFARE probe.
    pub fn mifare_block(mut self, block: u8) -> Self {
        self.config.mifare_block = block;
        self
    }

    /// Currency label for the balance estimate.
    pub fn balance_currency(mut self, currency: impl Into<String>) -> Self {
        self.config.balance_currency = currency.into();
        self
    }

    /// See [`ScanConfig::unwrap_record_template`].
    pub fn unwrap_record_template(mut self, enabled: bool) -> Self {
        self.config.unwrap_record_template = enabled;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<ScanConfig> {
        let config = self.config;
        if config.candidate_aids.is_empty() {
            return Err(Error::InvalidConfig("no candidate AIDs".into()));
        }
        if config.first_sfi == 0 || config.last_sfi > MAX_SFI || config.first_sfi > config.last_sfi
        {
            return Err(Error::InvalidConfig(format!(
                "SFI range {}..={} outside 1..={}",
                config.first_sfi, config.last_sfi, MAX_SFI
            )));
        }
        Ok(config)
    }
}
