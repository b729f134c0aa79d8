use std::io::{self, Write};

use rdiv_solve::DividerSolution;
use uom::si::{electric_current::ampere, electric_potential::volt, power::watt, ratio::percent};

use crate::format;

/// Writes the final report for a search result.
pub fn write(mut out: impl Write, best: Option<&DividerSolution>) -> io::Result<()> {
    let Some(s) = best else {
        return writeln!(out, "\nNo valid resistor pair found under these constraints.");
    };

    writeln!(out, "\n--- Final Results ---")?;
    writeln!(out, "Rbottom = {}", format::resistance(s.r_bottom))?;
    writeln!(out, "Rtop = {}", format::resistance(s.r_top))?;
    writeln!(out, "Actual Vout = {:.4} V", s.v_out.get::<volt>())?;
    writeln!(out, "Error = {:.2}%", s.error.get::<percent>())?;
    writeln!(out, "String Current = {:.6} A", s.current.get::<ampere>())?;
    writeln!(out, "Power (Rtop) = {:.6} W", s.power_top.get::<watt>())?;
    writeln!(out, "Power (Rbottom) = {:.6} W", s.power_bottom.get::<watt>())
}
