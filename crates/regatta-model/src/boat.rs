//! Boat-type codes.
//!
//! A boat-type code such as `"J16 4x+"` carries the seat count as the digit
//! immediately preceding a rig symbol (`x` sculling, `-` coxless sweep, `+`
//! coxed sweep), optionally followed by a second `+` for a coxed sculling
//! boat.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

static BOAT_TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([1248])([x\-+])(\+)?").expect("Invalid boat type regex"));

/// Parsed form of a boat-type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoatClass {
    /// Rowing seats, excluding the cox.
    pub seats: u8,
    pub sculling: bool,
    pub coxed: bool,
}

impl BoatClass {
    /// Parse a boat-type code, returning `None` when it has no seat count.
    ///
    /// # Examples
    ///
    /// ```
    /// use regatta_model::BoatClass;
    ///
    /// let quad = BoatClass::parse("J16 4x+").unwrap();
    /// assert_eq!(quad.seats, 4);
    /// assert!(quad.sculling && quad.coxed);
    /// assert!(BoatClass::parse("Eights").is_none());
    /// ```
    pub fn parse(code: &str) -> Option<Self> {
        let captures = BOAT_TYPE_REGEX.captures(code)?;
        let seats = captures.get(1)?.as_str().parse::<u8>().ok()?;
        let rig = captures.get(2)?.as_str();
        let second_plus = captures.get(3).is_some();
        Some(Self {
            seats,
            sculling: rig == "x",
            coxed: rig == "+" || second_plus,
        })
    }

    /// Parse the boat type of an entry row.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::BoatType`]: a code without a seat count would
    /// silently undercount seat totals, so it aborts the run.
    pub fn from_code(code: &str, row: usize) -> Result<Self> {
        Self::parse(code).ok_or_else(|| PipelineError::BoatType {
            code: code.to_string(),
            row,
        })
    }
}
