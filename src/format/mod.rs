// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! printf-style message formatting.
//!
//! Contract messages are templates plus positional arguments, rendered only
//! when a check fails. The syntax follows the classic printf family
//! (`%s`, `%d`, `%5.2f`, `%2$s`, ...), see [`specifier`] for the grammar.
//!
//! This code runs on the failure path, so it never fails itself:
//!
//! | Situation                           | Output                               |
//! |-------------------------------------|--------------------------------------|
//! | more arguments than specifiers      | extra arguments ignored              |
//! | specifier without an argument       | specifier copied verbatim            |
//! | unknown conversion / bad syntax     | copied verbatim                      |
//! | width or precision over `MAX_WIDTH` | copied verbatim                      |
//! | conversion does not fit argument    | argument rendered as with `%s`       |

mod arg;
pub mod specifier;

pub use arg::Arg;
pub use specifier::{pieces, ArgIndex, Conversion, Flags, Piece, Pieces, Specifier};

/// Largest width or precision a specifier may request.
pub const MAX_WIDTH: usize = 4096;

/// Render `template` with positional `args`.
///
/// ```
/// use ensure::{args, format::sprintf};
///
/// assert_eq!(
///     sprintf("This error uses '%s' to print the number %d.", &args!["X", 42]),
///     "This error uses 'X' to print the number 42."
/// );
/// ```
pub fn sprintf(template: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0usize;
    let mut previous: Option<usize> = None;

    for piece in pieces(template) {
        let spec = match piece {
            Piece::Literal(text) => {
                out.push_str(text);
                continue;
            }
            Piece::Spec(spec) => spec,
        };

        match spec.conversion {
            Conversion::Percent => justify(&mut out, "%", &spec),
            Conversion::Newline => out.push('\n'),
            _ => {
                // INVARIANT: a missing argument never panics; the specifier is copied through.
                let slot = match spec.index {
                    ArgIndex::Next => {
                        next += 1;
                        Some(next - 1)
                    }
                    ArgIndex::Explicit(position) => Some(position - 1),
                    ArgIndex::Previous => previous,
                };

                match slot.and_then(|s| args.get(s).map(|arg| (s, arg))) {
                    Some((slot, arg)) => {
                        previous = Some(slot);
                        let text = convert(&spec, arg);
                        justify(&mut out, &text, &spec);
                    }
                    None => out.push_str(spec.raw),
                }
            }
        }
    }

    out
}

/// Render one argument for one specifier, without the outer padding.
fn convert(spec: &Specifier<'_>, arg: &Arg<'_>) -> String {
    let text = match (spec.conversion, arg) {
        (Conversion::String, _) => truncate(plain(arg), spec.precision),
        (Conversion::Boolean, _) => truncate(boolean(arg).to_string(), spec.precision),
        (_, Arg::Null) => "null".to_string(),

        (Conversion::Char, _) => match char_of(arg) {
            Some(c) => c.to_string(),
            None => plain(arg),
        },

        (Conversion::Decimal, Arg::Int { value, .. }) => signed(
            *value < 0,
            value.unsigned_abs().to_string(),
            "",
            spec.flags,
            spec.width,
        ),
        (Conversion::Decimal, Arg::UInt(value)) => {
            signed(false, value.to_string(), "", spec.flags, spec.width)
        }

        (Conversion::Octal | Conversion::Hex, Arg::Int { value, bits }) => {
            radix(spec, twos_complement(*value, *bits))
        }
        (Conversion::Octal | Conversion::Hex, Arg::UInt(value)) => radix(spec, *value),

        (Conversion::Scientific | Conversion::Fixed | Conversion::General, Arg::Float(value)) => {
            float(spec, *value)
        }

        _ => plain(arg),
    };

    if spec.upper {
        text.to_uppercase()
    } else {
        text
    }
}

/// The `%s` rendering of an argument.
fn plain(arg: &Arg<'_>) -> String {
    match arg {
        Arg::Null => "null".to_string(),
        Arg::Bool(b) => b.to_string(),
        Arg::Char(c) => c.to_string(),
        Arg::Int { value, .. } => value.to_string(),
        Arg::UInt(value) => value.to_string(),
        Arg::Float(value) => float_to_string(*value),
        Arg::Str(s) => s.to_string(),
        Arg::Display(d) => d.to_string(),
    }
}

/// `%b`: null is false, booleans are themselves, anything else is true.
fn boolean(arg: &Arg<'_>) -> bool {
    match arg {
        Arg::Null => false,
        Arg::Bool(b) => *b,
        _ => true,
    }
}

fn char_of(arg: &Arg<'_>) -> Option<char> {
    match arg {
        Arg::Char(c) => Some(*c),
        Arg::Int { value, .. } => u32::try_from(*value).ok().and_then(char::from_u32),
        Arg::UInt(value) => u32::try_from(*value).ok().and_then(char::from_u32),
        _ => None,
    }
}

fn truncate(text: String, precision: Option<usize>) -> String {
    match precision {
        Some(max) if text.chars().count() > max => text.chars().take(max).collect(),
        _ => text,
    }
}

/// Shortest round-trip decimal, `.0` for integral values, `E` notation
/// outside `[1e-3, 1e7)`.
fn float_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let text = value.to_string();
        return if text.contains('.') {
            text
        } else {
            text + ".0"
        };
    }

    let text = format!("{:E}", value);
    match text.split_once('E') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{}.0E{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// Sign, prefix, grouping and zero padding for a number whose magnitude is
/// already rendered as `digits`.
fn signed(
    negative: bool,
    digits: String,
    prefix: &str,
    flags: Flags,
    width: Option<usize>,
) -> String {
    let digits = if flags.contains(Flags::GROUPING) {
        group(&digits)
    } else {
        digits
    };

    let (lead, trail) = if negative {
        if flags.contains(Flags::PARENTHESES) {
            ("(", ")")
        } else {
            ("-", "")
        }
    } else if flags.contains(Flags::PLUS) {
        ("+", "")
    } else if flags.contains(Flags::LEADING_SPACE) {
        (" ", "")
    } else {
        ("", "")
    };

    let mut out = String::with_capacity(digits.len() + 4);
    out.push_str(lead);
    out.push_str(prefix);

    if let (true, Some(width)) = (flags.contains(Flags::ZERO_PAD), width) {
        let used = lead.len() + prefix.len() + digits.len() + trail.len();
        out.push_str(&"0".repeat(width.saturating_sub(used)));
    }

    out.push_str(&digits);
    out.push_str(trail);
    out
}

fn radix(spec: &Specifier<'_>, value: u64) -> String {
    let (digits, prefix) = match spec.conversion {
        Conversion::Octal => (format!("{:o}", value), "0"),
        _ => (format!("{:x}", value), "0x"),
    };
    let prefix = if spec.flags.contains(Flags::ALTERNATE) {
        prefix
    } else {
        ""
    };
    let flags = spec.flags & Flags::ZERO_PAD;
    signed(false, digits, prefix, flags, spec.width)
}

fn twos_complement(value: i64, bits: u32) -> u64 {
    let raw = value as u64;
    if bits >= u64::BITS {
        raw
    } else {
        raw & ((1u64 << bits) - 1)
    }
}

fn float(spec: &Specifier<'_>, value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let negative = value.is_sign_negative();
    let magnitude = value.abs();
    let mut flags = spec.flags;

    if magnitude.is_infinite() {
        flags.remove(Flags::ZERO_PAD | Flags::GROUPING);
        return signed(negative, "Infinity".to_string(), "", flags, spec.width);
    }

    let precision = spec.precision.unwrap_or(6);
    let digits = match spec.conversion {
        Conversion::Fixed => fixed(magnitude, precision),
        Conversion::Scientific => {
            flags.remove(Flags::GROUPING);
            scientific(magnitude, precision)
        }
        _ => general(magnitude, precision),
    };

    signed(negative, digits, "", flags, spec.width)
}

/// Shortest round-trip decimal digits of a finite, non-negative value and
/// the position of the decimal point among them.
fn decimal(magnitude: f64) -> (Vec<u8>, i32) {
    let text = format!("{:e}", magnitude);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    (digits, exponent.parse::<i32>().unwrap_or(0) + 1)
}

/// Keep the first `keep` digits, rounding half-up on the first dropped one.
fn round_half_up(mut digits: Vec<u8>, mut point: i32, keep: i32) -> (Vec<u8>, i32) {
    let Ok(keep) = usize::try_from(keep) else {
        return (Vec::new(), point);
    };
    if keep >= digits.len() {
        return (digits, point);
    }

    let round_up = digits[keep] >= 5;
    digits.truncate(keep);
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                point += 1;
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }
    (digits, point)
}

/// Digit at `at`, zero outside the kept digits.
fn digit_at(digits: &[u8], at: i32) -> char {
    let digit = usize::try_from(at)
        .ok()
        .and_then(|i| digits.get(i).copied())
        .unwrap_or(0);
    char::from(b'0' + digit)
}

/// `ddd.ddd` with `precision` decimals.
fn fixed(magnitude: f64, precision: usize) -> String {
    let precision = precision as i32;
    let (digits, point) = decimal(magnitude);
    let (digits, point) = round_half_up(digits, point, point + precision);

    let mut out = String::new();
    if point <= 0 {
        out.push('0');
    } else {
        out.extend((0..point).map(|i| digit_at(&digits, i)));
    }
    if precision > 0 {
        out.push('.');
        out.extend((point..point + precision).map(|i| digit_at(&digits, i)));
    }
    out
}

/// `d.ddddde+xx`: at least two exponent digits, always signed.
fn scientific(magnitude: f64, precision: usize) -> String {
    let precision = precision as i32;
    let (digits, point) = decimal(magnitude);
    let (digits, point) = round_half_up(digits, point, precision + 1);
    let exponent = if magnitude == 0.0 { 0 } else { point - 1 };

    let mut out = String::new();
    out.push(digit_at(&digits, 0));
    if precision > 0 {
        out.push('.');
        out.extend((1..=precision).map(|i| digit_at(&digits, i)));
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", out, sign, exponent.unsigned_abs())
}

/// `%g`: fixed notation when the rounded value lies in `[1e-4, 10^precision)`,
/// scientific otherwise. Precision counts significant digits.
fn general(magnitude: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if magnitude == 0.0 {
        return fixed(magnitude, precision - 1);
    }

    let (digits, point) = decimal(magnitude);
    let (_, point) = round_half_up(digits, point, precision as i32);
    let exponent = point - 1;

    if (-4..precision as i32).contains(&exponent) {
        fixed(magnitude, (precision as i32 - 1 - exponent) as usize)
    } else {
        scientific(magnitude, precision - 1)
    }
}

/// Insert `,` every three digits of the integer part.
fn group(digits: &str) -> String {
    let (integer, fraction) = match digits.find('.') {
        Some(at) => digits.split_at(at),
        None => (digits, ""),
    };

    let mut out = String::with_capacity(digits.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(fraction);
    out
}

/// Pad `text` with spaces up to the specifier's width.
fn justify(out: &mut String, text: &str, spec: &Specifier<'_>) {
    let padding = spec
        .width
        .map_or(0, |width| width.saturating_sub(text.chars().count()));

    if spec.flags.contains(Flags::LEFT_JUSTIFY) {
        out.push_str(text);
        out.push_str(&" ".repeat(padding));
    } else {
        out.push_str(&" ".repeat(padding));
        out.push_str(text);
    }
}
