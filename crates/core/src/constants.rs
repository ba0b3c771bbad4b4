//! Physical constants as a read-only table.
//!
//! Every entry is also available as a `pub const`, so callers can use
//! `constants::SPEED_OF_LIGHT` directly or iterate [`CONSTANTS`] for display.

/// Broad grouping used when listing the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Chemistry,
    Mechanics,
    Electromagnetism,
    Quantum,
}

/// One named physical constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    pub symbol: &'static str,
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub category: Category,
}

// Chemistry and thermodynamics
pub const GAS_CONSTANT_L_ATM: f64 = 0.082_057_461_4;
pub const GAS_CONSTANT_L_MMHG: f64 = 62.363_671_1;
pub const GAS_CONSTANT_J: f64 = 8.314_462_175;
pub const GAS_CONSTANT_BTU: f64 = 1.985_88;
pub const GAS_CONSTANT_PSIA: f64 = 10.7316;
pub const WATER_IONIZATION: f64 = 1.01e-14;
pub const AVOGADRO: f64 = 6.022e23;

// Mechanics
pub const STANDARD_GRAVITY: f64 = 9.80665;
pub const STANDARD_GRAVITY_FT: f64 = 32.174_049;
pub const GRAVITATIONAL_CONSTANT: f64 = 6.673e-11;

// Electromagnetism
pub const ELEMENTARY_CHARGE: f64 = 1.602e-19;
pub const VACUUM_PERMEABILITY: f64 = std::f64::consts::PI / 2.5e6;
pub const VACUUM_PERMITTIVITY: f64 = 8.854e-12;
pub const COULOMB_CONSTANT: f64 = 8.988e9;
pub const SPEED_OF_LIGHT: f64 = 2.998e8;

// Quantum physics
pub const PLANCK: f64 = 6.626e-34;
pub const REDUCED_PLANCK: f64 = 1.054e-34;
pub const ELECTRON_MASS: f64 = 9.109e-31;
pub const PROTON_MASS: f64 = 1.673e-27;
pub const NEUTRON_MASS: f64 = 1.675e-27;
pub const ELECTRON_VOLT: f64 = 1.602e-19;

const fn entry(
    symbol: &'static str,
    name: &'static str,
    value: f64,
    unit: &'static str,
    category: Category,
) -> Constant {
    Constant {
        symbol,
        name,
        value,
        unit,
        category,
    }
}

pub static CONSTANTS: &[Constant] = &[
    entry("r_atm", "gas constant", GAS_CONSTANT_L_ATM, "L*atm/mol/K", Category::Chemistry),
    entry("r_mmhg", "gas constant", GAS_CONSTANT_L_MMHG, "L*mmHg/mol/K", Category::Chemistry),
    entry("r_joule", "gas constant", GAS_CONSTANT_J, "J/mol/K", Category::Chemistry),
    entry("r_btu", "gas constant", GAS_CONSTANT_BTU, "BTU/lbmol/R", Category::Chemistry),
    entry("r_psia", "gas constant", GAS_CONSTANT_PSIA, "psia*ft^3/lbmol/R", Category::Chemistry),
    entry("kw", "water auto-ionization constant", WATER_IONIZATION, "", Category::Chemistry),
    entry("avo", "Avogadro constant", AVOGADRO, "1/mol", Category::Chemistry),
    entry("g", "standard gravity", STANDARD_GRAVITY, "m/s^2", Category::Mechanics),
    entry("g_ft", "standard gravity", STANDARD_GRAVITY_FT, "ft/s^2", Category::Mechanics),
    entry("G", "gravitational constant", GRAVITATIONAL_CONSTANT, "N*m^2/kg^2", Category::Mechanics),
    entry("ele", "elementary charge", ELEMENTARY_CHARGE, "C", Category::Electromagnetism),
    entry("mu_0", "vacuum permeability", VACUUM_PERMEABILITY, "N/A^2", Category::Electromagnetism),
    entry("epsilon_0", "vacuum permittivity", VACUUM_PERMITTIVITY, "F/m", Category::Electromagnetism),
    entry("k_e", "Coulomb constant", COULOMB_CONSTANT, "N*m^2/C^2", Category::Electromagnetism),
    entry("c", "speed of light in vacuum", SPEED_OF_LIGHT, "m/s", Category::Electromagnetism),
    entry("h", "Planck constant", PLANCK, "J*s", Category::Quantum),
    entry("hbar", "reduced Planck constant", REDUCED_PLANCK, "J*s", Category::Quantum),
    entry("m_e", "electron mass", ELECTRON_MASS, "kg", Category::Quantum),
    entry("m_p", "proton mass", PROTON_MASS, "kg", Category::Quantum),
    entry("m_n", "neutron mass", NEUTRON_MASS, "kg", Category::Quantum),
    entry("eV", "electron-volt", ELECTRON_VOLT, "J", Category::Quantum),
];

/// Find a constant by its (case-sensitive) symbol.
pub fn lookup(symbol: &str) -> Option<&'static Constant> {
    CONSTANTS.iter().find(|c| c.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_unique() {
        for (i, a) in CONSTANTS.iter().enumerate() {
            for b in &CONSTANTS[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup("g").unwrap().value, STANDARD_GRAVITY);
        assert_eq!(lookup("G").unwrap().value, GRAVITATIONAL_CONSTANT);
        assert!(lookup("nope").is_none());
    }

    #[test]
    fn coulomb_constant_agrees_with_permittivity() {
        let derived = 1.0 / (4.0 * std::f64::consts::PI * VACUUM_PERMITTIVITY);
        assert!((derived - COULOMB_CONSTANT).abs() / COULOMB_CONSTANT < 1e-3);
    }
}
