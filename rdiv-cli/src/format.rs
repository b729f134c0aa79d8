use uom::si::{
    electrical_resistance::{kiloohm, megaohm, milliohm, ohm},
    f64::ElectricalResistance,
};

/// Formats a resistance with a magnitude-appropriate unit and precision.
///
/// Sub-ohm values are shown in mΩ. Ohm, kilohm and megohm values get two
/// decimals in the first decade of their unit and one decimal above it.
pub fn resistance(value: ElectricalResistance) -> String {
    let ohms = value.get::<ohm>();

    if ohms < 1e-3 {
        format!("{:.2} mΩ", value.get::<milliohm>())
    } else if ohms < 1.0 {
        format!("{:.1} mΩ", value.get::<milliohm>())
    } else if ohms < 10.0 {
        format!("{ohms:.2} Ω")
    } else if ohms < 1e3 {
        format!("{ohms:.1} Ω")
    } else if ohms < 10e3 {
        format!("{:.2} kΩ", value.get::<kiloohm>())
    } else if ohms < 1e6 {
        format!("{:.1} kΩ", value.get::<kiloohm>())
    } else if ohms < 10e6 {
        format!("{:.2} MΩ", value.get::<megaohm>())
    } else {
        format!("{:.1} MΩ", value.get::<megaohm>())
    }
}
