//! Named boolean toggles that decide which Makefile sections are emitted

use std::fmt;

/// Recognized option keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionName {
    Test,
    Bench,
    Shadow,
    Cover,
    CoverHtml,
    CpuProfile,
    MemProfile,
    Race,
    TestRace,
    Library,
}

impl OptionName {
    /// Every recognized key, in declaration order
    pub const ALL: [OptionName; 10] = [
        OptionName::Test,
        OptionName::Bench,
        OptionName::Shadow,
        OptionName::Cover,
        OptionName::CoverHtml,
        OptionName::CpuProfile,
        OptionName::MemProfile,
        OptionName::Race,
        OptionName::TestRace,
        OptionName::Library,
    ];

    /// Key spelling, identical to the command-line flag name
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionName::Test => "test",
            OptionName::Bench => "bench",
            OptionName::Shadow => "shadow",
            OptionName::Cover => "cover",
            OptionName::CoverHtml => "coverHTML",
            OptionName::CpuProfile => "cpuProfile",
            OptionName::MemProfile => "memProfile",
            OptionName::Race => "race",
            OptionName::TestRace => "testRace",
            OptionName::Library => "library",
        }
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat set of option values; anything not switched on is false
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionSet {
    pub test: bool,
    pub bench: bool,
    pub shadow: bool,
    pub cover: bool,
    pub cover_html: bool,
    pub cpu_profile: bool,
    pub mem_profile: bool,
    pub race: bool,
    pub test_race: bool,
    pub library: bool,
}

impl OptionSet {
    /// Create an option set with every key false
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, name: OptionName) -> bool {
        match name {
            OptionName::Test => self.test,
            OptionName::Bench => self.bench,
            OptionName::Shadow => self.shadow,
            OptionName::Cover => self.cover,
            OptionName::CoverHtml => self.cover_html,
            OptionName::CpuProfile => self.cpu_profile,
            OptionName::MemProfile => self.mem_profile,
            OptionName::Race => self.race,
            OptionName::TestRace => self.test_race,
            OptionName::Library => self.library,
        }
    }

    pub fn set(&mut self, name: OptionName, value: bool) {
        let slot = match name {
            OptionName::Test => &mut self.test,
            OptionName::Bench => &mut self.bench,
            OptionName::Shadow => &mut self.shadow,
            OptionName::Cover => &mut self.cover,
            OptionName::CoverHtml => &mut self.cover_html,
            OptionName::CpuProfile => &mut self.cpu_profile,
            OptionName::MemProfile => &mut self.mem_profile,
            OptionName::Race => &mut self.race,
            OptionName::TestRace => &mut self.test_race,
            OptionName::Library => &mut self.library,
        };
        *slot = value;
    }

    /// Builder-style variant of [`OptionSet::set`] that switches a key on
    pub fn with(mut self, name: OptionName) -> Self {
        self.set(name, true);
        self
    }

    /// Names of the keys that are switched on
    pub fn enabled(&self) -> impl Iterator<Item = OptionName> + '_ {
        OptionName::ALL
            .into_iter()
            .filter(move |name| self.is_enabled(*name))
    }
}

impl FromIterator<OptionName> for OptionSet {
    fn from_iter<I: IntoIterator<Item = OptionName>>(iter: I) -> Self {
        iter.into_iter().fold(OptionSet::new(), OptionSet::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_false() {
        let options = OptionSet::default();
        for name in OptionName::ALL {
            assert!(!options.is_enabled(name), "{name} should be off");
        }
        assert_eq!(options.enabled().count(), 0);
    }

    #[test]
    fn test_set_and_with_touch_only_named_key() {
        for name in OptionName::ALL {
            let options = OptionSet::new().with(name);
            assert_eq!(options.enabled().collect::<Vec<_>>(), vec![name]);

            let mut cleared = options;
            cleared.set(name, false);
            assert_eq!(cleared, OptionSet::default());
        }
    }

    #[test]
    fn test_option_names_match_flag_spelling() {
        let names: Vec<String> = OptionName::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec![
                "test",
                "bench",
                "shadow",
                "cover",
                "coverHTML",
                "cpuProfile",
                "memProfile",
                "race",
                "testRace",
                "library"
            ]
        );
    }

    #[test]
    fn test_collect_from_names() {
        let options: OptionSet = [OptionName::Test, OptionName::Cover]
            .into_iter()
            .collect();
        assert!(options.test);
        assert!(options.cover);
        assert!(!options.bench);
        assert_eq!(options.enabled().count(), 2);
    }
}
