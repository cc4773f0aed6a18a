//! List command implementation
//!
//! Prints every distribution in the catalogue with its parameter names.

use std::io::{self, Write};

use variate_samplers::distribution::{names, parameter_names};

use crate::Result;

/// Run the list command
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_catalogue(&mut out)
}

/// Write one `name(param, ...)` line per distribution
pub fn write_catalogue<W: Write>(out: &mut W) -> Result<()> {
    for name in names() {
        let params = parameter_names(name).unwrap_or(&[]);
        writeln!(out, "{}({})", name, params.join(", "))?;
    }
    Ok(())
}
