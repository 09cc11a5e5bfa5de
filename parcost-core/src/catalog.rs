//! Language conversion catalogs for Function Points sizing.

/// Abstraction over the LOC-per-function-point lookup for testability and
/// for callers that maintain their own calibration data.
#[cfg_attr(test, mockall::automock)]
pub trait LocCatalog {
    /// LOC/FP ratio for a language, if the catalog knows it.
    fn ratio(&self, language: &str) -> Option<f64>;
}

/// Published LOC-per-function-point ratios, per language.
pub const LOC_PER_FUNCTION_POINT: [(&str, f64); 29] = [
    ("4GL", 40.0),
    ("Ada 83", 71.0),
    ("Ada 95", 49.0),
    ("APL", 32.0),
    ("Basic (compiled)", 91.0),
    ("Basic (interpreted)", 128.0),
    ("Basic ANSI/Quick/Turbo", 64.0),
    ("C", 128.0),
    ("C++", 29.0),
    ("Clipper", 19.0),
    ("Cobol ANSI 85", 91.0),
    ("Delphi 1", 29.0),
    ("Assembler", 119.0),
    ("Assembler (Macro)", 213.0),
    ("Forth", 64.0),
    ("Fortran 77", 105.0),
    ("FoxPro 2.5", 34.0),
    ("Java", 53.0),
    ("Modula 2", 80.0),
    ("Oracle", 40.0),
    ("Oracle 2000", 23.0),
    ("Paradox", 36.0),
    ("Pascal", 91.0),
    ("Turbo Pascal 5", 49.0),
    ("PowerBuilder", 16.0),
    ("Prolog", 64.0),
    ("Visual Basic 3", 32.0),
    ("Visual C++", 34.0),
    ("Visual Cobol", 20.0),
];

/// Catalog backed by the published conversion table.
#[derive(Debug, Default, Clone)]
pub struct StandardCatalog;

impl StandardCatalog {
    /// Create a new standard catalog.
    pub fn new() -> Self {
        Self
    }
}

impl LocCatalog for StandardCatalog {
    fn ratio(&self, language: &str) -> Option<f64> {
        LOC_PER_FUNCTION_POINT
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(language))
            .map(|(_, ratio)| *ratio)
    }
}

/// Estimate lines of code for a language by catalog lookup.
///
/// Returns `None` when the catalog does not know the language.
pub fn estimate_lines_of_code<C: LocCatalog>(
    catalog: &C,
    language: &str,
    adjusted_function_points: f64,
) -> Option<f64> {
    let ratio = catalog.ratio(language)?;
    Some(adjusted_function_points * ratio)
}

#[cfg(test)]
mod tests {
    use super::{LocCatalog, MockLocCatalog, StandardCatalog, estimate_lines_of_code};

    #[test]
    fn standard_catalog_knows_published_languages() {
        let catalog = StandardCatalog::new();
        assert_eq!(catalog.ratio("C"), Some(128.0));
        assert_eq!(catalog.ratio("Java"), Some(53.0));
        assert_eq!(catalog.ratio("java"), Some(53.0));
        assert_eq!(catalog.ratio("Brainfuck"), None);
    }

    #[test]
    fn estimates_loc_from_catalog_ratio() {
        let catalog = StandardCatalog::new();
        assert_eq!(estimate_lines_of_code(&catalog, "Java", 100.0), Some(5300.0));
        assert_eq!(estimate_lines_of_code(&catalog, "Brainfuck", 100.0), None);
    }

    #[test]
    fn custom_catalogs_override_the_ratio() {
        let mut catalog = MockLocCatalog::new();
        catalog
            .expect_ratio()
            .withf(|language| language == "Rust")
            .returning(|_| Some(40.0));

        assert_eq!(estimate_lines_of_code(&catalog, "Rust", 50.0), Some(2000.0));
    }
}
