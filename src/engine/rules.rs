use crate::ConfigError;

/// Birth and survival thresholds.
///
/// A dead cell is born with exactly `reanimate` neighbors. A live cell survives
/// with `n` neighbors iff `under_population < n < over_population`; both bounds
/// are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    pub reanimate: u8,
    pub under_population: u8,
    pub over_population: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            reanimate: 3,
            under_population: 1,
            over_population: 4,
        }
    }
}

impl Rules {
    pub fn new(reanimate: u8, under_population: u8, over_population: u8) -> Result<Self, ConfigError> {
        let rules = Self {
            reanimate,
            under_population,
            over_population,
        };
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reanimate > 8 {
            return Err(ConfigError::Reanimate(self.reanimate));
        }
        // `over_population == 9` lets cells with all eight neighbors survive
        if self.over_population <= self.under_population || self.over_population > 9 {
            return Err(ConfigError::SurvivalRange {
                under: self.under_population,
                over: self.over_population,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn next_state(&self, alive: bool, neibs: u8) -> bool {
        if alive {
            self.under_population < neibs && neibs < self.over_population
        } else {
            neibs == self.reanimate
        }
    }
}
