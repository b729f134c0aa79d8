use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use rdiv_solve::DividerSpec;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential},
};

const PROMPTS: [&str; 3] = [
    "Enter Vin (Input Voltage, V): ",
    "Enter Vo (Output Voltage, V): ",
    "Enter Imax (Maximum Current through Rbottom, A): ",
];

/// Raw divider requirements as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub v_in: f64,
    pub v_out: f64,
    pub i_max: f64,
}

impl Inputs {
    /// Parses `VIN VOUT IMAX` from command-line arguments.
    ///
    /// Returns `Ok(None)` when no arguments were given, so the caller can
    /// fall back to prompting.
    pub fn from_args(args: &[String]) -> Result<Option<Self>> {
        match args {
            [] => Ok(None),
            [v_in, v_out, i_max] => Ok(Some(Self {
                v_in: parse("Vin", v_in)?,
                v_out: parse("Vo", v_out)?,
                i_max: parse("Imax", i_max)?,
            })),
            _ => bail!("expected three arguments: VIN VOUT IMAX (volts, volts, amperes)"),
        }
    }

    /// Prompts for each value on `output` and reads one line per value from `input`.
    pub fn prompt(mut input: impl BufRead, mut output: impl Write) -> Result<Self> {
        let mut values = [0.0; 3];
        for (value, prompt) in values.iter_mut().zip(PROMPTS) {
            output.write_all(prompt.as_bytes())?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("input ended before all values were entered");
            }
            let label = prompt.split_whitespace().nth(1).unwrap_or("value");
            *value = parse(label, &line)?;
        }

        let [v_in, v_out, i_max] = values;
        Ok(Self { v_in, v_out, i_max })
    }

    /// Converts to SI quantities and validates them as a divider spec.
    pub fn to_spec(self) -> Result<DividerSpec> {
        DividerSpec::new(
            ElectricPotential::new::<volt>(self.v_in),
            ElectricPotential::new::<volt>(self.v_out),
            ElectricCurrent::new::<ampere>(self.i_max),
        )
        .context("Vin, Vo, and Imax must be positive, with Vo less than Vin")
    }
}

fn parse(label: &str, text: &str) -> Result<f64> {
    text.trim()
        .parse()
        .with_context(|| format!("{label} is not a number: {:?}", text.trim()))
}
