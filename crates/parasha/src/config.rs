//! Configuration for parasha resolution.

/// Which festival calendar governs the weekly reading.
///
/// Outside Israel the last days of Pesach and Shavuot and Simchat Torah are
/// observed one day longer, which can displace a Sabbath reading and put the
/// two calendars a week apart until they realign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Location {
    /// Two-day festival observance.
    #[default]
    Diaspora,
    /// One-day festival observance.
    Israel,
}

/// Language used for portion names and labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English transliteration ("Bereshit").
    #[default]
    English,
    /// Hebrew script ("בראשית").
    Hebrew,
}

/// Configuration for a parasha lookup.
///
/// # Example
///
/// ```
/// use gabbai_parasha::{Language, Location, ParashaConfig};
///
/// let config = ParashaConfig::new()
///     .with_location(Location::Israel)
///     .with_language(Language::Hebrew);
/// assert_eq!(config.location(), Location::Israel);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParashaConfig {
    location: Location,
    language: Language,
}

impl ParashaConfig {
    /// Creates a configuration with the defaults: diaspora, English names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the festival calendar.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Sets the label language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Returns the festival calendar.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Returns the label language.
    pub fn language(&self) -> Language {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ParashaConfig::default();
        assert_eq!(cfg.location(), Location::Diaspora);
        assert_eq!(cfg.language(), Language::English);
    }

    #[test]
    fn test_builder_chaining() {
        let cfg = ParashaConfig::new()
            .with_location(Location::Israel)
            .with_language(Language::Hebrew);
        assert_eq!(cfg.location(), Location::Israel);
        assert_eq!(cfg.language(), Language::Hebrew);
    }
}
