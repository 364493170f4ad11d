//! Static conversion table
//!
//! Each category maps to a [`CategoryRule`]: either a ratio table keyed by
//! unit name, or a formula for affine units. Factors are "how many of this
//! unit make one base unit", so a conversion is `value * to / from`.

use super::category::Category;
use super::temperature::{TEMPERATURE_UNITS, convert_temperature};
use crate::core::error::DomainError;

/// Signature of a formula-based conversion: `(value, from_unit, to_unit)`
pub type FormulaFn = fn(f64, &str, &str) -> f64;

/// How a category converts between its units
#[derive(Clone, Copy)]
pub enum CategoryRule {
    /// Linear units, `(name, factor)` pairs; the first entry is the base unit
    Ratio(&'static [(&'static str, f64)]),
    /// Non-linear units converted by a closed-form function
    Formula {
        apply: FormulaFn,
        units: &'static [&'static str],
    },
}

impl CategoryRule {
    /// Unit names accepted by this rule, in display order
    pub fn unit_names(&self) -> Vec<&'static str> {
        match self {
            CategoryRule::Ratio(factors) => factors.iter().map(|(name, _)| *name).collect(),
            CategoryRule::Formula { units, .. } => units.to_vec(),
        }
    }
}

impl std::fmt::Debug for CategoryRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryRule::Ratio(factors) => f.debug_tuple("Ratio").field(factors).finish(),
            CategoryRule::Formula { units, .. } => f
                .debug_struct("Formula")
                .field("units", units)
                .finish_non_exhaustive(),
        }
    }
}

const LENGTH: &[(&str, f64)] = &[
    ("meter", 1.0),
    ("kilometer", 0.001),
    ("mile", 0.000621371),
    ("yard", 1.09361),
];

const WEIGHT: &[(&str, f64)] = &[
    ("gram", 1.0),
    ("kilogram", 0.001),
    ("pound", 0.00220462),
    ("ounce", 0.035274),
];

const AREA: &[(&str, f64)] = &[
    ("square_meter", 1.0),
    ("square_kilometer", 0.000001),
    ("square_mile", 3.861e-7),
    ("acre", 0.000247105),
];

const VOLUME: &[(&str, f64)] = &[
    ("liter", 1.0),
    ("milliliter", 1000.0),
    ("cubic_meter", 0.001),
    ("gallon", 0.264172),
];

static STANDARD: ConversionTable = ConversionTable {
    entries: &[
        (Category::Length, CategoryRule::Ratio(LENGTH)),
        (Category::Weight, CategoryRule::Ratio(WEIGHT)),
        (
            Category::Temperature,
            CategoryRule::Formula {
                apply: convert_temperature,
                units: TEMPERATURE_UNITS,
            },
        ),
        (Category::Area, CategoryRule::Ratio(AREA)),
        (Category::Volume, CategoryRule::Ratio(VOLUME)),
    ],
};

/// Immutable category → rule mapping shared by the whole process
#[derive(Debug)]
pub struct ConversionTable {
    entries: &'static [(Category, CategoryRule)],
}

impl ConversionTable {
    /// The built-in table covering every [`Category`]
    pub fn standard() -> &'static ConversionTable {
        &STANDARD
    }

    /// Get the rule for a category
    pub fn rule(&self, category: Category) -> Result<&CategoryRule, DomainError> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, rule)| rule)
            .ok_or_else(|| DomainError::UnknownCategory(category.to_string()))
    }

    /// Categories present in this table, in display order
    pub fn categories(&self) -> Vec<Category> {
        self.entries.iter().map(|(c, _)| *c).collect()
    }

    /// Unit names for a category, in display order
    pub fn units(&self, category: Category) -> Result<Vec<&'static str>, DomainError> {
        Ok(self.rule(category)?.unit_names())
    }

    /// Base unit of a ratio category (`None` for formula categories)
    pub fn base_unit(&self, category: Category) -> Result<Option<&'static str>, DomainError> {
        Ok(match self.rule(category)? {
            CategoryRule::Ratio(factors) => factors.first().map(|(name, _)| *name),
            CategoryRule::Formula { .. } => None,
        })
    }

    /// Resolve a user-supplied unit name to its canonical spelling.
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn resolve_unit(&self, category: Category, unit: &str) -> Result<&'static str, DomainError> {
        let wanted = unit.trim().to_ascii_lowercase();
        self.rule(category)?
            .unit_names()
            .into_iter()
            .find(|name| *name == wanted)
            .ok_or_else(|| DomainError::UnknownUnit {
                category,
                unit: unit.trim().to_string(),
            })
    }

    /// Convert `value` from one unit to another within a category.
    ///
    /// Unknown units fail with [`DomainError::UnknownUnit`]. The value itself
    /// is not validated.
    pub fn convert(
        &self,
        category: Category,
        from_unit: &str,
        to_unit: &str,
        value: f64,
    ) -> Result<f64, DomainError> {
        let from = self.resolve_unit(category, from_unit)?;
        let to = self.resolve_unit(category, to_unit)?;

        match self.rule(category)? {
            CategoryRule::Ratio(factors) => {
                let from_factor = factor_of(factors, from);
                let to_factor = factor_of(factors, to);
                Ok(value * (to_factor / from_factor))
            }
            CategoryRule::Formula { apply, .. } => Ok(apply(value, from, to)),
        }
    }
}

fn factor_of(factors: &[(&str, f64)], unit: &str) -> f64 {
    factors
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= 1e-9 * scale
    }

    fn table() -> &'static ConversionTable {
        ConversionTable::standard()
    }

    #[test]
    fn test_every_category_has_a_rule() {
        assert_eq!(table().categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_ratio_tables_are_well_formed() {
        for category in Category::ALL {
            if let CategoryRule::Ratio(factors) = table().rule(category).unwrap() {
                assert!(!factors.is_empty(), "{category} has no units");
                assert_eq!(factors[0].1, 1.0, "{category} base unit must be 1");
                for (name, factor) in factors.iter() {
                    assert!(*factor > 0.0, "{category}/{name} must be positive");
                }
            }
        }
    }

    #[test]
    fn test_meter_kilometer() {
        let km = table()
            .convert(Category::Length, "meter", "kilometer", 1000.0)
            .unwrap();
        assert!(approx_eq(km, 1.0));

        let m = table()
            .convert(Category::Length, "kilometer", "meter", 1.0)
            .unwrap();
        assert!(approx_eq(m, 1000.0));
    }

    #[test]
    fn test_kilogram_to_gram() {
        let g = table()
            .convert(Category::Weight, "kilogram", "gram", 1.0)
            .unwrap();
        assert!(approx_eq(g, 1000.0));
    }

    #[test]
    fn test_liter_to_milliliter() {
        let ml = table()
            .convert(Category::Volume, "liter", "milliliter", 2.5)
            .unwrap();
        assert!(approx_eq(ml, 2500.0));
    }

    #[test]
    fn test_temperature_through_table() {
        let f = table()
            .convert(Category::Temperature, "celsius", "fahrenheit", 0.0)
            .unwrap();
        assert!(approx_eq(f, 32.0));

        let c = table()
            .convert(Category::Temperature, "fahrenheit", "celsius", 212.0)
            .unwrap();
        assert!(approx_eq(c, 100.0));

        let same = table()
            .convert(Category::Temperature, "celsius", "celsius", 37.0)
            .unwrap();
        assert_eq!(same, 37.0);
    }

    #[test]
    fn test_ratio_round_trip() {
        let values = [0.0, 0.1, 1.0, 42.0, 12345.678];
        for category in Category::ALL.into_iter().filter(|c| !c.is_formula()) {
            let units = table().units(category).unwrap();
            for a in &units {
                for b in &units {
                    for v in values {
                        let there = table().convert(category, a, b, v).unwrap();
                        let back = table().convert(category, b, a, there).unwrap();
                        assert!(approx_eq(back, v), "{category}: {a}->{b}->{a} for {v}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit_fails() {
        let err = table()
            .convert(Category::Length, "meter", "furlong", 1.0)
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::UnknownUnit { category: Category::Length, ref unit } if unit == "furlong"
        ));
    }

    #[test]
    fn test_unit_from_other_category_fails() {
        assert!(table()
            .convert(Category::Weight, "meter", "gram", 1.0)
            .is_err());
    }

    #[test]
    fn test_unknown_temperature_unit_fails() {
        let err = table()
            .convert(Category::Temperature, "kelvin", "celsius", 300.0)
            .unwrap_err();
        assert!(matches!(err, DomainError::UnknownUnit { .. }));
    }

    #[test]
    fn test_resolve_unit_is_case_insensitive() {
        assert_eq!(
            table().resolve_unit(Category::Area, " Square_Mile ").unwrap(),
            "square_mile"
        );
    }

    #[test]
    fn test_base_units() {
        assert_eq!(table().base_unit(Category::Length).unwrap(), Some("meter"));
        assert_eq!(table().base_unit(Category::Volume).unwrap(), Some("liter"));
        assert_eq!(table().base_unit(Category::Temperature).unwrap(), None);
    }

    #[test]
    fn test_temperature_units_listed() {
        assert_eq!(
            table().units(Category::Temperature).unwrap(),
            vec!["celsius", "fahrenheit"]
        );
    }
}
