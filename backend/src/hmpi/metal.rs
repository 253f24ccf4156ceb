//! Heavy metals and their drinking-water reference standards
//!
//! Concentrations are expressed in mg/L throughout. The permissible and ideal
//! values follow the Indian drinking-water standard (permissible and
//! acceptable limits); the maximum admissible concentrations follow WHO
//! guideline values.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Heavy metals understood by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Metal {
    Arsenic,
    Lead,
    Cadmium,
    Chromium,
    Mercury,
    Nickel,
    Copper,
    Zinc,
    Iron,
    Manganese,
}

impl Metal {
    /// All metals, in the order the input form presents them
    pub const ALL: [Metal; 10] = [
        Metal::Arsenic,
        Metal::Lead,
        Metal::Cadmium,
        Metal::Chromium,
        Metal::Mercury,
        Metal::Nickel,
        Metal::Copper,
        Metal::Zinc,
        Metal::Iron,
        Metal::Manganese,
    ];

    /// Lowercase name, as used in request keys
    pub fn name(&self) -> &'static str {
        match self {
            Metal::Arsenic => "arsenic",
            Metal::Lead => "lead",
            Metal::Cadmium => "cadmium",
            Metal::Chromium => "chromium",
            Metal::Mercury => "mercury",
            Metal::Nickel => "nickel",
            Metal::Copper => "copper",
            Metal::Zinc => "zinc",
            Metal::Iron => "iron",
            Metal::Manganese => "manganese",
        }
    }

    /// Chemical symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Metal::Arsenic => "As",
            Metal::Lead => "Pb",
            Metal::Cadmium => "Cd",
            Metal::Chromium => "Cr",
            Metal::Mercury => "Hg",
            Metal::Nickel => "Ni",
            Metal::Copper => "Cu",
            Metal::Zinc => "Zn",
            Metal::Iron => "Fe",
            Metal::Manganese => "Mn",
        }
    }

    /// Reference standard for this metal
    pub fn standard(&self) -> Standard {
        // (permissible, ideal, mac)
        let (permissible, ideal, mac) = match self {
            Metal::Arsenic => (0.01, 0.0, 0.05),
            Metal::Lead => (0.01, 0.0, 0.05),
            Metal::Cadmium => (0.003, 0.0, 0.01),
            Metal::Chromium => (0.05, 0.0, 0.05),
            Metal::Mercury => (0.001, 0.0, 0.001),
            Metal::Nickel => (0.02, 0.0, 0.07),
            Metal::Copper => (1.5, 0.05, 2.0),
            Metal::Zinc => (15.0, 5.0, 5.0),
            Metal::Iron => (1.0, 0.3, 0.3),
            Metal::Manganese => (0.3, 0.1, 0.4),
        };
        Standard {
            metal: *self,
            symbol: self.symbol(),
            permissible,
            ideal,
            mac,
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a key does not name a known metal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetal(
    /// Key as supplied
    pub String,
);

impl FromStr for Metal {
    type Err = UnknownMetal;

    /// Accepts the full name or the chemical symbol, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Metal::ALL
            .into_iter()
            .find(|metal| {
                key.eq_ignore_ascii_case(metal.name()) || key.eq_ignore_ascii_case(metal.symbol())
            })
            .ok_or_else(|| UnknownMetal(s.to_string()))
    }
}

/// Reference limits for a single metal, in mg/L
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Standard {
    /// Metal the limits apply to
    pub metal: Metal,
    /// Chemical symbol of the metal
    pub symbol: &'static str,
    /// Highest permissible value (S)
    pub permissible: f64,
    /// Ideal or desirable value (I)
    pub ideal: f64,
    /// Maximum admissible concentration
    pub mac: f64,
}

impl Standard {
    /// Unit weight, inversely proportional to the permissible value
    pub fn unit_weight(&self) -> f64 {
        1.0 / self.permissible
    }

    /// Sub-index of a measured concentration relative to the ideal and permissible values
    pub fn sub_index(&self, concentration: f64) -> f64 {
        (concentration - self.ideal).abs() / (self.permissible - self.ideal) * 100.0
    }
}

/// Reference standards for every metal, in form order
pub fn reference_standards() -> Vec<Standard> {
    Metal::ALL.iter().map(Metal::standard).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_and_symbol() {
        assert_eq!("lead".parse::<Metal>(), Ok(Metal::Lead));
        assert_eq!("Pb".parse::<Metal>(), Ok(Metal::Lead));
        assert_eq!("PB".parse::<Metal>(), Ok(Metal::Lead));
        assert_eq!("Manganese".parse::<Metal>(), Ok(Metal::Manganese));
        assert_eq!(" zinc ".parse::<Metal>(), Ok(Metal::Zinc));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "unobtainium".parse::<Metal>(),
            Err(UnknownMetal("unobtainium".to_string()))
        );
        assert!("".parse::<Metal>().is_err());
    }

    #[test]
    fn test_standards_are_well_formed() {
        for standard in reference_standards() {
            assert!(standard.permissible > standard.ideal, "{}", standard.metal);
            assert!(standard.ideal >= 0.0);
            assert!(standard.mac > 0.0);
        }
        assert_eq!(reference_standards().len(), Metal::ALL.len());
    }

    #[test]
    fn test_sub_index() {
        let lead = Metal::Lead.standard();
        assert!((lead.sub_index(0.01) - 100.0).abs() < 1e-9);
        assert!((lead.sub_index(0.0) - 0.0).abs() < 1e-9);
        assert!((lead.unit_weight() - 100.0).abs() < 1e-9);

        // Below-ideal readings count as a deviation too
        let copper = Metal::Copper.standard();
        assert!((copper.sub_index(0.0) - 0.05 / 1.45 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_standard_serialization() {
        let json = serde_json::to_value(Metal::Arsenic.standard()).unwrap();
        assert_eq!(json["metal"], "arsenic");
        assert_eq!(json["symbol"], "As");
        assert_eq!(json["permissible"], 0.01);
    }
}
