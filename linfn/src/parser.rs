use crate::error::{ParseError, Result};
use crate::function::LinearFunction;
use crate::grammar::{Grammar, SlopeTerm, parse_number, scan_slope_term};
use crate::scanner::Scanner;

// Find the leftmost slope term, returning where it starts.
// Scanner is left right after the match.
fn locate_slope_term(scanner: &mut Scanner, var: char) -> Option<(usize, SlopeTerm)> {
    for start in 0..scanner.len() {
        scanner.set_pos(start);
        if let Some(term) = scan_slope_term(scanner, var) {
            return Some((start, term));
        }
    }
    None
}

impl Grammar {
    /// Extract slope and intercept from `input`.
    ///
    /// Inputs are fully validated first, anything this grammar rejects is a
    /// `MalformedLinearFunction` and never yields a value.
    pub fn parse(&self, input: &str) -> Result<LinearFunction> {
        if !self.is_valid(input) {
            log::trace!("rejected {:?} as a linear function of {}", input, self.variable());
            return Err(ParseError::MalformedLinearFunction(input.to_string()));
        }
        let mut scanner = Scanner::new(input);
        let (start, term) = locate_slope_term(&mut scanner, self.variable())
            .ok_or_else(|| ParseError::MissingVariableTerm(input.to_string()))?;
        let slope = term.value()?;

        // whatever is left over is the constant, keeping its sign
        let mut rest = scanner.without(start, scanner.pos());
        let sign = rest.scan_sign();
        let intercept = match rest.scan_unsigned() {
            Some(digits) => {
                let magnitude = parse_number(&digits)?;
                sign.map_or(magnitude, |s| s.apply(magnitude))
            }
            None => 0.0,
        };
        if !rest.at_end() {
            return Err(ParseError::MalformedLinearFunction(input.to_string()));
        }

        log::debug!("parsed {:?}: slope={} intercept={}", input, slope, intercept);
        Ok(LinearFunction::new(slope, intercept))
    }
}

/// Parse `input` with the default grammar over `x`.
pub fn parse(input: &str) -> Result<LinearFunction> {
    Grammar::default().parse(input)
}
