#![deny(warnings)]

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static SIGNS: &[char] = &['+', '-'];

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn apply(self, magnitude: f64) -> f64 {
        match self {
            Sign::Plus => magnitude,
            Sign::Minus => -magnitude,
        }
    }
}

/// Backtracking cursor over an input with its spaces removed.
///
/// Scanning methods either advance past what they matched or leave `pos`
/// untouched, so callers can chain alternatives by saving `pos()` and
/// restoring it with `set_pos()`.
#[derive(Clone, Debug)]
pub struct Scanner {
    src: Vec<char>,
    pos: usize,
}

impl Scanner {
    pub fn new(input: &str) -> Scanner {
        Scanner {
            src: input.chars().filter(|c| *c != ' ').collect(),
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) -> bool {
        if pos > self.src.len() {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn len(&self) -> usize {
        self.src.len()
    }

    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.src.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }

    pub fn accept(&mut self, what: char) -> bool {
        if self.peek() == Some(what) {
            self.pos += 1;
            return true;
        }
        false
    }

    // Advance only if the next char is in the 'any' set
    pub fn accept_any(&mut self, any: &[char]) -> Option<char> {
        let next = self.peek().filter(|c| any.contains(c))?;
        self.pos += 1;
        Some(next)
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all(&mut self, over: &[char]) -> bool {
        let start = self.pos;
        while self.accept_any(over).is_some() {}
        self.pos > start
    }

    pub fn span(&self, from: usize, to: usize) -> String {
        self.src[from..to].iter().collect()
    }

    /// A fresh scanner over the input with `from..to` cut out.
    pub fn without(&self, from: usize, to: usize) -> Scanner {
        let mut src = self.src[..from].to_vec();
        src.extend_from_slice(&self.src[to..]);
        Scanner { src, pos: 0 }
    }

    pub fn scan_sign(&mut self) -> Option<Sign> {
        match self.accept_any(SIGNS)? {
            '-' => Some(Sign::Minus),
            _ => Some(Sign::Plus),
        }
    }

    // scan unsigned numbers like [0-9]+(\.[0-9]+)?
    pub fn scan_unsigned(&mut self) -> Option<String> {
        let start = self.pos;
        if !self.skip_all(DIGITS) {
            return None;
        }
        // a '.' without fractional digits isn't part of the number
        let backtrack = self.pos;
        if !(self.accept('.') && self.skip_all(DIGITS)) {
            self.set_pos(backtrack);
        }
        Some(self.span(start, self.pos))
    }

    pub fn skip_digits(&mut self) -> bool {
        self.skip_all(DIGITS)
    }
}

impl std::fmt::Display for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.span(0, self.src.len()))
    }
}
