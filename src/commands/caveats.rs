//! Caveats command implementation

use crate::error::Result;
use crate::formula::Formula;

/// Print the post-install message
pub fn run(formula: &Formula) -> Result<()> {
    crate::caveats::print(formula);
    Ok(())
}
