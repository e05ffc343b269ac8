// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Template parsing: splits a message template into literal runs and
//! format specifiers.
//!
//! Grammar (one specifier):
//!
//! ```text
//! %[index$][flags][width][.precision]conversion
//!
//! index      := digits            (1-based, explicit)
//! flags      := [-#+ 0,(<]*       ('<' reuses the previous argument)
//! width      := digits
//! precision  := digits
//! conversion := s S b B c C d o x X e E f g G % n
//! ```
//!
//! Anything that does not match the grammar is not a specifier. The parser
//! yields the `%` as a one-character literal and resumes right after it, so a
//! malformed specifier ends up in the output verbatim.

use bitflags::bitflags;

use super::MAX_WIDTH;

bitflags! {
    /// Flags between the `%` (or the explicit index) and the width.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u8 {
        /// `-`: pad on the right.
        const LEFT_JUSTIFY = 1 << 0;
        /// `#`: `0x` for hex, leading `0` for octal.
        const ALTERNATE = 1 << 1;
        /// `+`: always print a sign.
        const PLUS = 1 << 2;
        /// ` `: leading space for non-negative numbers.
        const LEADING_SPACE = 1 << 3;
        /// `0`: pad numbers with zeros after the sign.
        const ZERO_PAD = 1 << 4;
        /// `,`: group integer digits in threes.
        const GROUPING = 1 << 5;
        /// `(`: negative numbers in parentheses.
        const PARENTHESES = 1 << 6;
    }
}

/// Which argument a specifier consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgIndex {
    /// The next argument in sequence.
    Next,
    /// An explicit 1-based position (`%2$s`). Does not move the sequence.
    Explicit(usize),
    /// The argument used by the previous specifier (`%<s`).
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `s`
    String,
    /// `b`
    Boolean,
    /// `c`
    Char,
    /// `d`
    Decimal,
    /// `o`
    Octal,
    /// `x`
    Hex,
    /// `e`
    Scientific,
    /// `f`
    Fixed,
    /// `g`
    General,
    /// `%%`
    Percent,
    /// `%n`
    Newline,
}

impl Conversion {
    /// Whether the conversion consumes an argument.
    pub fn takes_argument(self) -> bool {
        !matches!(self, Conversion::Percent | Conversion::Newline)
    }
}

/// A parsed format specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier<'t> {
    pub index: ArgIndex,
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: Conversion,
    /// Upper-case variant (`S`, `B`, `C`, `X`, `E`, `G`).
    pub upper: bool,
    /// The specifier exactly as written in the template.
    pub raw: &'t str,
}

/// One piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'t> {
    Literal(&'t str),
    Spec(Specifier<'t>),
}

/// Iterator over the pieces of a template.
#[derive(Debug, Clone)]
pub struct Pieces<'t> {
    template: &'t str,
    pos: usize,
}

/// Split a template into literal runs and specifiers.
pub fn pieces(template: &str) -> Pieces<'_> {
    Pieces { template, pos: 0 }
}

impl<'t> Iterator for Pieces<'t> {
    type Item = Piece<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.template.get(self.pos..).filter(|r| !r.is_empty())?;

        match rest.find('%') {
            None => {
                self.pos = self.template.len();
                Some(Piece::Literal(rest))
            }
            Some(0) => match parse_specifier(rest) {
                Some(spec) => {
                    self.pos += spec.raw.len();
                    Some(Piece::Spec(spec))
                }
                None => {
                    self.pos += 1;
                    Some(Piece::Literal(&rest[..1]))
                }
            },
            Some(at) => {
                self.pos += at;
                Some(Piece::Literal(&rest[..at]))
            }
        }
    }
}

/// Parse the specifier at the start of `s` (which begins with `%`).
fn parse_specifier(s: &str) -> Option<Specifier<'_>> {
    let bytes = s.as_bytes();
    let mut i = 1;

    let mut index = ArgIndex::Next;
    let digits_end = scan_digits(bytes, i);
    if digits_end > i && bytes.get(digits_end) == Some(&b'$') {
        let position = parse_number(&s[i..digits_end], usize::MAX)?;
        if position == 0 {
            return None;
        }
        index = ArgIndex::Explicit(position);
        i = digits_end + 1;
    }

    let mut flags = Flags::empty();
    while let Some(&byte) = bytes.get(i) {
        let flag = match byte {
            b'-' => Flags::LEFT_JUSTIFY,
            b'#' => Flags::ALTERNATE,
            b'+' => Flags::PLUS,
            b' ' => Flags::LEADING_SPACE,
            b'0' => Flags::ZERO_PAD,
            b',' => Flags::GROUPING,
            b'(' => Flags::PARENTHESES,
            b'<' => {
                index = ArgIndex::Previous;
                i += 1;
                continue;
            }
            _ => break,
        };
        flags |= flag;
        i += 1;
    }

    let width_end = scan_digits(bytes, i);
    let width = if width_end > i {
        let width = parse_number(&s[i..width_end], MAX_WIDTH)?;
        i = width_end;
        Some(width)
    } else {
        None
    };

    let precision = if bytes.get(i) == Some(&b'.') {
        let precision_end = scan_digits(bytes, i + 1);
        if precision_end == i + 1 {
            return None;
        }
        let precision = parse_number(&s[i + 1..precision_end], MAX_WIDTH)?;
        i = precision_end;
        Some(precision)
    } else {
        None
    };

    let (conversion, upper) = match *bytes.get(i)? {
        b's' => (Conversion::String, false),
        b'S' => (Conversion::String, true),
        b'b' => (Conversion::Boolean, false),
        b'B' => (Conversion::Boolean, true),
        b'c' => (Conversion::Char, false),
        b'C' => (Conversion::Char, true),
        b'd' => (Conversion::Decimal, false),
        b'o' => (Conversion::Octal, false),
        b'x' => (Conversion::Hex, false),
        b'X' => (Conversion::Hex, true),
        b'e' => (Conversion::Scientific, false),
        b'E' => (Conversion::Scientific, true),
        b'f' => (Conversion::Fixed, false),
        b'g' => (Conversion::General, false),
        b'G' => (Conversion::General, true),
        b'%' => (Conversion::Percent, false),
        b'n' => (Conversion::Newline, false),
        _ => return None,
    };
    i += 1;

    Some(Specifier {
        index,
        flags,
        width,
        precision,
        conversion,
        upper,
        raw: &s[..i],
    })
}

fn scan_digits(bytes: &[u8], from: usize) -> usize {
    let mut end = from;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    end
}

fn parse_number(digits: &str, max: usize) -> Option<usize> {
    digits.parse::<usize>().ok().filter(|n| *n <= max)
}
