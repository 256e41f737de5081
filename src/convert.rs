//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use gabbai_olim::QueryConfig;
use gabbai_parasha::{Language, Location, ParashaConfig};
use gabbai_yahrzeit::{AdarPolicy, LeapAdar, ThirtiethRule};

use crate::cli::ReadingArgs;
use crate::config::{GabbaiConfig, ParashaToml, YahrzeitToml};

/// Parses a reading schedule name into the corresponding enum variant.
pub fn parse_location(s: &str) -> Result<Location> {
    match s.to_lowercase().as_str() {
        "diaspora" => Ok(Location::Diaspora),
        "israel" => Ok(Location::Israel),
        other => bail!("unknown location: {other:?}"),
    }
}

/// Parses a label language name into the corresponding enum variant.
pub fn parse_language(s: &str) -> Result<Language> {
    match s.to_lowercase().as_str() {
        "english" => Ok(Language::English),
        "hebrew" => Ok(Language::Hebrew),
        other => bail!("unknown language: {other:?}"),
    }
}

/// Parses the leap-year Adar choice into the corresponding enum variant.
pub fn parse_leap_adar(s: &str) -> Result<LeapAdar> {
    match s.to_lowercase().as_str() {
        "adar-i" => Ok(LeapAdar::AdarI),
        "adar-ii" => Ok(LeapAdar::AdarII),
        other => bail!("unknown leap_adar: {other:?} (expected \"adar-i\" or \"adar-ii\")"),
    }
}

/// Parses the 30 Adar I rule into the corresponding enum variant.
pub fn parse_thirtieth_rule(s: &str) -> Result<ThirtiethRule> {
    match s.to_lowercase().as_str() {
        "clamp" => Ok(ThirtiethRule::Clamp),
        "shevat-30" => Ok(ThirtiethRule::ShevatThirty),
        other => {
            bail!("unknown adar_i_thirtieth: {other:?} (expected \"clamp\" or \"shevat-30\")")
        }
    }
}

/// Builds a [`ParashaConfig`] from the TOML section, with CLI flags taking
/// precedence.
pub fn build_parasha_config(toml: &ParashaToml, flags: &ReadingArgs) -> Result<ParashaConfig> {
    let location = if flags.israel {
        Location::Israel
    } else {
        parse_location(&toml.location)?
    };
    let language = if flags.hebrew {
        Language::Hebrew
    } else {
        parse_language(&toml.language)?
    };
    Ok(ParashaConfig::new()
        .with_location(location)
        .with_language(language))
}

/// Builds an [`AdarPolicy`] from the TOML yahrzeit section.
pub fn build_adar_policy(toml: &YahrzeitToml) -> Result<AdarPolicy> {
    Ok(AdarPolicy::new()
        .with_leap_target(parse_leap_adar(&toml.leap_adar)?)
        .with_adar_i_thirtieth(parse_thirtieth_rule(&toml.adar_i_thirtieth)?))
}

/// Builds the full [`QueryConfig`] for the olim query.
pub fn build_query_config(config: &GabbaiConfig, flags: &ReadingArgs) -> Result<QueryConfig> {
    Ok(QueryConfig::new()
        .with_parasha(build_parasha_config(&config.parasha, flags)?)
        .with_adar_policy(build_adar_policy(&config.yahrzeit)?))
}
