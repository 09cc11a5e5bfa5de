//! Published rating scales for the COCOMO cost drivers.
//!
//! These are static configuration tables: the engine itself takes plain
//! numeric multipliers, callers use these scales to turn Very Low through
//! Extra High ratings into those numbers.

/// Discrete rating scale for one cost driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverScale {
    /// Short driver identifier (e.g. "rely").
    pub id: &'static str,
    /// Human-readable driver name.
    pub name: &'static str,
    /// Calibrated multipliers from the lowest to the highest rating.
    pub values: &'static [f64],
    /// Index of the nominal (1.00) rating.
    pub nominal: usize,
}

impl DriverScale {
    /// Multiplier for a rating index, if the index exists on this scale.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

/// The fifteen COCOMO 81 cost drivers.
pub const COCOMO81_COST_DRIVERS: [DriverScale; 15] = [
    DriverScale {
        id: "rely",
        name: "Required software reliability",
        values: &[0.75, 0.88, 1.00, 1.15, 1.40],
        nominal: 2,
    },
    DriverScale {
        id: "data",
        name: "Size of application database",
        values: &[0.94, 1.00, 1.08, 1.16],
        nominal: 1,
    },
    DriverScale {
        id: "cplx",
        name: "Complexity of the product",
        values: &[0.70, 0.85, 1.00, 1.15, 1.30, 1.65],
        nominal: 2,
    },
    DriverScale {
        id: "time",
        name: "Run-time performance constraints",
        values: &[1.00, 1.11, 1.30, 1.66],
        nominal: 0,
    },
    DriverScale {
        id: "stor",
        name: "Memory constraints",
        values: &[1.00, 1.06, 1.21, 1.56],
        nominal: 0,
    },
    DriverScale {
        id: "virt",
        name: "Volatility of the virtual machine environment",
        values: &[0.87, 1.00, 1.15, 1.30],
        nominal: 1,
    },
    DriverScale {
        id: "turn",
        name: "Required turnaround time",
        values: &[0.87, 1.00, 1.07, 1.15],
        nominal: 1,
    },
    DriverScale {
        id: "acap",
        name: "Analyst capability",
        values: &[1.46, 1.19, 1.00, 0.86, 0.71],
        nominal: 2,
    },
    DriverScale {
        id: "aexp",
        name: "Applications experience",
        values: &[1.29, 1.13, 1.00, 0.91, 0.82],
        nominal: 2,
    },
    DriverScale {
        id: "pcap",
        name: "Programmer capability",
        values: &[1.42, 1.17, 1.00, 0.86, 0.70],
        nominal: 2,
    },
    DriverScale {
        id: "vexp",
        name: "Virtual machine experience",
        values: &[1.21, 1.10, 1.00, 0.90],
        nominal: 2,
    },
    DriverScale {
        id: "lexp",
        name: "Programming language experience",
        values: &[1.14, 1.07, 1.00, 0.95],
        nominal: 2,
    },
    DriverScale {
        id: "modp",
        name: "Use of modern programming practices",
        values: &[1.24, 1.10, 1.00, 0.91, 0.82],
        nominal: 2,
    },
    DriverScale {
        id: "tool",
        name: "Use of software tools",
        values: &[1.24, 1.10, 1.00, 0.91, 0.83],
        nominal: 2,
    },
    DriverScale {
        id: "sced",
        name: "Required development schedule",
        values: &[1.23, 1.08, 1.00, 1.04, 1.10],
        nominal: 2,
    },
];

/// The seventeen COCOMO II post-architecture cost drivers.
pub const COCOMO2_COST_DRIVERS: [DriverScale; 17] = [
    DriverScale {
        id: "rely",
        name: "Required software reliability",
        values: &[0.82, 0.92, 1.00, 1.10, 1.26],
        nominal: 2,
    },
    DriverScale {
        id: "data",
        name: "Database size",
        values: &[0.90, 1.00, 1.14, 1.28],
        nominal: 1,
    },
    DriverScale {
        id: "cplx",
        name: "Product complexity",
        values: &[0.73, 0.87, 1.00, 1.17, 1.34, 1.74],
        nominal: 2,
    },
    DriverScale {
        id: "ruse",
        name: "Developed for reusability",
        values: &[0.95, 1.00, 1.07, 1.15, 1.24],
        nominal: 1,
    },
    DriverScale {
        id: "docu",
        name: "Documentation match to life-cycle needs",
        values: &[0.81, 0.91, 1.00, 1.11, 1.23],
        nominal: 2,
    },
    DriverScale {
        id: "time",
        name: "Execution time constraint",
        values: &[1.00, 1.11, 1.29, 1.63],
        nominal: 0,
    },
    DriverScale {
        id: "stor",
        name: "Main storage constraint",
        values: &[1.00, 1.05, 1.17, 1.46],
        nominal: 0,
    },
    DriverScale {
        id: "pvol",
        name: "Platform volatility",
        values: &[0.87, 1.00, 1.15, 1.30],
        nominal: 1,
    },
    DriverScale {
        id: "acap",
        name: "Analyst capability",
        values: &[1.42, 1.19, 1.00, 0.85, 0.71],
        nominal: 2,
    },
    DriverScale {
        id: "pcap",
        name: "Programmer capability",
        values: &[1.34, 1.15, 1.00, 0.88, 0.76],
        nominal: 2,
    },
    DriverScale {
        id: "pcon",
        name: "Personnel continuity",
        values: &[1.29, 1.12, 1.00, 0.90, 0.81],
        nominal: 2,
    },
    DriverScale {
        id: "apex",
        name: "Applications experience",
        values: &[1.22, 1.10, 1.00, 0.88, 0.81],
        nominal: 2,
    },
    DriverScale {
        id: "plex",
        name: "Platform experience",
        values: &[1.19, 1.09, 1.00, 0.91, 0.85],
        nominal: 2,
    },
    DriverScale {
        id: "ltex",
        name: "Language and toolset experience",
        values: &[1.20, 1.09, 1.00, 0.91, 0.84],
        nominal: 2,
    },
    DriverScale {
        id: "tool",
        name: "Use of software tools",
        values: &[1.17, 1.09, 1.00, 0.90, 0.78],
        nominal: 2,
    },
    DriverScale {
        id: "site",
        name: "Multisite development",
        values: &[1.22, 1.09, 1.00, 0.93, 0.86, 0.80],
        nominal: 2,
    },
    DriverScale {
        id: "sced",
        name: "Required development schedule",
        values: &[1.43, 1.14, 1.00],
        nominal: 2,
    },
];

/// Product of the selected multipliers, one selection index per driver.
///
/// Returns `None` when the selection list length differs from the scale list
/// or an index falls off its scale.
pub fn effort_multiplier(scales: &[DriverScale], selections: &[usize]) -> Option<f64> {
    if scales.len() != selections.len() {
        return None;
    }
    let mut product = 1.0;
    for (scale, &index) in scales.iter().zip(selections) {
        product *= scale.value(index)?;
    }
    Some(product)
}

/// Nominal selection indices (EAF 1.0) for a scale list.
pub fn nominal_selections(scales: &[DriverScale]) -> Vec<usize> {
    scales.iter().map(|scale| scale.nominal).collect()
}
