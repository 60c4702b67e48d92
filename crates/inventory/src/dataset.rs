//! The fixed inventory table.
//!
//! Held column-oriented, as maintained; [`rows`] turns it into row records
//! once at load. Column arrays are fixed-size so a missing cell fails to compile.

use partdash_core::DomainResult;

use crate::catalog::Catalog;
use crate::part::PartRow;

/// Number of parts in the fixed table.
pub const PART_COUNT: usize = 31;

const PART_NUMBERS: [&str; PART_COUNT] = [
    "E2081-66555", "E2081-66556", "E2084-66501", "E2084-66508", "E2084-66522",
    "E2084-66523", "E2081-61116", "E2081-61120", "E2084-67600", "E2084-61101",
    "E2084-64701", "E2084-64401", "E2084-00102", "E2084-64400", "E2084-66203",
    "E2084-66200", "E2084-67907", "E2084-67920", "E3065-66504", "E3065-66505",
    "E3065-66519", "E3065-66517", "E2084-67960", "E3065-64701", "E3065-67901",
    "E2084-04107", "E2084-04108", "E3065-66513", "E2085-66520", "E3066-66514",
    "E2084-67927",
];

const DESCRIPTIONS: [&str; PART_COUNT] = [
    "HV Driver", "Waveplate 1\"", "Motorized Flipper", "Mounting pedistal", "Holding Fork",
    "90 degree prisms", "Prism Coating", "Prism Mount", "Translation stage", "Picomotor actuator",
    "Picomotor driver", "Window (FS coated)", "Bare Vacuum Flange", "Vacuum Pump", "Vacuum Pump Valve",
    "Mirror", "Mount claw", "Mounting pedistal", "Holding Fork", "Picomotor Servo",
    "Tilting Mirror", "Mirror Driver crate", "Mirror Driver card", "Mirror Readback Card", "Lens",
    "Optical Table", "Laser Diode", "Hyphenator Duphenator", "LH Smokeshifter", "Bracket",
    "Injection Pump",
];

const SUPPLIERS: [&str; PART_COUNT] = [
    "McDonalds", "McDonalds", "McDonalds", "McDonalds", "Wendys",
    "Wendys", "Quiznos", "Quiznos", "Quiznos", "Quiznos",
    "Taco Time", "KFC", "KFC", "Subway", "IHOP",
    "IHOP", "Sizzler", "Quiznos", "Wendys", "Wendys",
    "McDonalds", "Wendys", "Sizzler", "Taco Time", "Panda Express",
    "BYU-I Food Services", "BYU-I Food Services", "Wendys", "McDonalds", "McDonalds",
    "Sizzler",
];

const YIELDS: [f64; PART_COUNT] = [
    99.0, 99.0, 99.7, 99.0, 99.0,
    99.0, 99.0, 99.0, 99.0, 98.0,
    100.0, 99.0, 99.0, 100.0, 100.0,
    100.0, 100.0, 100.0, 99.0, 99.0,
    100.0, 99.0, 95.0, 100.0, 100.0,
    100.0, 100.0, 95.0, 100.0, 100.0,
    100.0,
];

const CM1_INVENTORY: [u32; PART_COUNT] = [
    107, 158, 1379, 168, 95,
    66, 161, 279, 34, 1187,
    13, 30, 16, 30, 123,
    36, 8, 283, 711, 467,
    102, 520, 375, 5, 659,
    1355, 622, 438, 0, 0,
    9,
];

const CM2_INVENTORY: [u32; PART_COUNT] = [
    65, 55, 1694, 88, 51,
    12, 40, 73, 11, 320,
    4, 23, 10, 8, 34,
    11, 8, 372, 440, 81,
    16, 241, 72, 0, 196,
    233, 100, 183, 0, 0,
    0,
];

const OEM_INVENTORY: [Option<u32>; PART_COUNT] = [
    Some(14), Some(14), Some(252), None, Some(7),
    Some(8), Some(7), Some(14), Some(2), Some(63),
    Some(2), Some(2), Some(2), Some(2), Some(7),
    Some(2), Some(1), None, Some(36), Some(27),
    Some(7), Some(63), None, None, Some(36),
    None, None, Some(63), None, None,
    Some(1),
];

/// Row-oriented view of the fixed table, in table order.
pub fn rows() -> Vec<PartRow> {
    (0..PART_COUNT)
        .map(|i| PartRow {
            part_number: PART_NUMBERS[i].to_string(),
            description: DESCRIPTIONS[i].to_string(),
            supplier: SUPPLIERS[i].to_string(),
            yield_pct: YIELDS[i],
            inventory_cm1: CM1_INVENTORY[i],
            inventory_cm2: CM2_INVENTORY[i],
            inventory_oem: OEM_INVENTORY[i],
        })
        .collect()
}

/// The catalog every deployment serves.
pub fn standard_catalog() -> DomainResult<Catalog> {
    Catalog::from_rows(rows())
}
