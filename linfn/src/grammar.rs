use crate::error::{ParseError, Result};
use crate::scanner::{Scanner, Sign};

static NONZERO: &[char] = &['1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Magnitude written in front of the variable symbol.
#[derive(Clone, PartialEq, Debug)]
pub enum Coefficient {
    /// Bare variable, eg: `x` or `-x`
    Implicit,
    /// Digits as written, eg: `20` or `2.5`
    Explicit(String),
}

/// A signed slope-variable sub-expression like `-2.5x`, `+x` or `20x`.
#[derive(Clone, PartialEq, Debug)]
pub struct SlopeTerm {
    pub sign: Option<Sign>,
    pub coefficient: Coefficient,
}

impl SlopeTerm {
    pub fn value(&self) -> Result<f64> {
        let magnitude = match self.coefficient {
            Coefficient::Implicit => 1.0,
            Coefficient::Explicit(ref digits) => parse_number(digits)?,
        };
        Ok(self.sign.map_or(magnitude, |s| s.apply(magnitude)))
    }
}

pub fn parse_number(lexeme: &str) -> Result<f64> {
    lexeme
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(lexeme.to_string()))
}

// scan coefficients followed by the variable: [0-9]+\.[0-9]+x | [1-9][0-9]*x | x
pub fn scan_coefficient(scanner: &mut Scanner, var: char) -> Option<Coefficient> {
    let backtrack = scanner.pos();
    // try decimals first, an integer scan stops short at the '.'
    if scanner.skip_digits() && scanner.accept('.') && scanner.skip_digits() {
        let end = scanner.pos();
        if scanner.accept(var) {
            return Some(Coefficient::Explicit(scanner.span(backtrack, end)));
        }
    }
    scanner.set_pos(backtrack);
    // integers can't start with 0, that rules out 0x and 01x
    if scanner.accept_any(NONZERO).is_some() {
        scanner.skip_digits();
        let end = scanner.pos();
        if scanner.accept(var) {
            return Some(Coefficient::Explicit(scanner.span(backtrack, end)));
        }
    }
    scanner.set_pos(backtrack);
    if scanner.accept(var) {
        return Some(Coefficient::Implicit);
    }
    None
}

// scan a slope term where the sign is optional
pub fn scan_slope_term(scanner: &mut Scanner, var: char) -> Option<SlopeTerm> {
    let backtrack = scanner.pos();
    let sign = scanner.scan_sign();
    match scan_coefficient(scanner, var) {
        Some(coefficient) => Some(SlopeTerm { sign, coefficient }),
        None => {
            scanner.set_pos(backtrack);
            None
        }
    }
}

/// Recognizer for the two linear function shapes over a variable symbol.
///
/// Slope first: `[+-]? coefficient var ([+-] constant)?`, eg: `-2.5x+3`.
/// Intercept first: `[+-]? constant [+-] coefficient var`, eg: `3-x`.
///
/// Constants are `[0-9]+(\.[0-9]+)?`, coefficients are decimals with digits
/// on both sides of the point, integers without a leading zero, or nothing.
/// Spaces anywhere in the input are ignored.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Grammar {
    variable: char,
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar { variable: 'x' }
    }
}

impl Grammar {
    pub fn new(variable: char) -> Result<Grammar> {
        if variable.is_ascii_digit() || ['+', '-', '.', ' '].contains(&variable) {
            return Err(ParseError::InvalidVariable(variable));
        }
        Ok(Grammar { variable })
    }

    pub fn variable(&self) -> char {
        self.variable
    }

    pub fn is_valid(&self, input: &str) -> bool {
        let mut scanner = Scanner::new(input);
        if self.slope_first(&mut scanner) {
            return true;
        }
        scanner.set_pos(0);
        self.intercept_first(&mut scanner)
    }

    fn slope_first(&self, scanner: &mut Scanner) -> bool {
        if scan_slope_term(scanner, self.variable).is_none() {
            return false;
        }
        if scanner.at_end() {
            return true;
        }
        // sign is mandatory in front of a trailing constant
        scanner.scan_sign().is_some() && scanner.scan_unsigned().is_some() && scanner.at_end()
    }

    fn intercept_first(&self, scanner: &mut Scanner) -> bool {
        scanner.scan_sign();
        scanner.scan_unsigned().is_some()
            && scanner.scan_sign().is_some()
            && scan_coefficient(scanner, self.variable).is_some()
            && scanner.at_end()
    }
}

/// Check `input` against the default grammar over `x`.
pub fn is_valid(input: &str) -> bool {
    Grammar::default().is_valid(input)
}
