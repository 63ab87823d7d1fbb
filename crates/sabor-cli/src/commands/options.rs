//! Option listing commands: the closed choice lists the form selects from.

use crate::error::Result;
use crate::output;
use sabor::tables::{Cuisine, Locality};

pub(crate) fn localities() -> Result<()> {
    output::section("Localities");
    for locality in Locality::ALL {
        println!("  {:>2}  {}", locality.code(), locality.name());
    }
    Ok(())
}

pub(crate) fn cuisines() -> Result<()> {
    output::section("Cuisines");
    for cuisine in Cuisine::ALL {
        println!("  {:>2}  {}", cuisine.code(), cuisine.name());
    }
    Ok(())
}
