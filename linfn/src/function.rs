use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::grammar::Grammar;

/// `f(x) = slope * x + intercept`
///
/// Only built by parsing, eg: `"2x+3".parse::<LinearFunction>()`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LinearFunction {
    slope: f64,
    intercept: f64,
}

impl LinearFunction {
    pub(crate) fn new(slope: f64, intercept: f64) -> Self {
        LinearFunction { slope, intercept }
    }

    /// Parse `input` or panic. Check with `is_valid` first when input is
    /// untrusted, or use `str::parse` to get a `Result`.
    pub fn from_string(input: &str) -> Self {
        match input.parse() {
            Ok(function) => function,
            Err(e) => panic!("linfn: {}", e),
        }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn exec(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// The `x` for which `exec(x) == y`.
    ///
    /// A zero slope divides by zero following IEEE 754: `±inf`, or `NaN`
    /// when `y` equals the intercept.
    pub fn x_from_y(&self, y: f64) -> f64 {
        (y - self.intercept) / self.slope
    }

    pub fn root(&self) -> f64 {
        self.x_from_y(0.0)
    }

    pub fn increasing(&self) -> bool {
        self.slope > 0.0
    }

    /// Anything not increasing, a zero slope included.
    pub fn decreasing(&self) -> bool {
        !self.increasing()
    }
}

impl FromStr for LinearFunction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grammar::default().parse(s)
    }
}

// slope first over x, eg: 2x+3, -x, 0.5x-1.5
impl fmt::Display for LinearFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.slope == 1.0 {
            write!(f, "x")?;
        } else if self.slope == -1.0 {
            write!(f, "-x")?;
        } else {
            write!(f, "{}x", self.slope)?;
        }
        if self.intercept != 0.0 {
            write!(f, "{:+}", self.intercept)?;
        }
        Ok(())
    }
}
