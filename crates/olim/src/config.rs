//! Configuration for an olim query.

use gabbai_parasha::ParashaConfig;
use gabbai_yahrzeit::AdarPolicy;

/// Settings for [`crate::resolve_with`].
///
/// # Example
///
/// ```
/// use gabbai_olim::QueryConfig;
/// use gabbai_parasha::{Location, ParashaConfig};
///
/// let config = QueryConfig::new()
///     .with_parasha(ParashaConfig::new().with_location(Location::Israel));
/// assert_eq!(config.parasha().location(), Location::Israel);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryConfig {
    parasha: ParashaConfig,
    adar_policy: AdarPolicy,
}

impl QueryConfig {
    /// Creates a configuration with default parasha and Adar settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parasha lookup configuration.
    pub fn with_parasha(mut self, parasha: ParashaConfig) -> Self {
        self.parasha = parasha;
        self
    }

    /// Sets the Adar policy for yahrzeit matching.
    pub fn with_adar_policy(mut self, adar_policy: AdarPolicy) -> Self {
        self.adar_policy = adar_policy;
        self
    }

    /// Returns the parasha lookup configuration.
    pub fn parasha(&self) -> &ParashaConfig {
        &self.parasha
    }

    /// Returns the Adar policy.
    pub fn adar_policy(&self) -> &AdarPolicy {
        &self.adar_policy
    }
}
