//! Punycode ([RFC 3492](http://tools.ietf.org/html/rfc3492)) implementation.
//!
//! This works on a single label, without the `xn--` prefix.
//! `encode` and `decode` take and return slices and vectors of `char`;
//! `encode_str` and `decode_to_string` are wrappers over `str` and `String`.

use std::char;

const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: char = '-';

#[inline]
fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (((BASE - T_MIN + 1) * delta) / (delta + SKEW))
}

#[inline]
fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}

/// Convert Punycode to a Unicode `String`.
#[inline]
pub fn decode_to_string(input: &str) -> Option<String> {
    decode(input).map(|chars| chars.into_iter().collect())
}

/// Convert Punycode to Unicode.
///
/// Return None on malformed input (anything outside ASCII, or an invalid digit)
/// or on overflow.
pub fn decode(input: &str) -> Option<Vec<char>> {
    if !input.is_ascii() {
        return None;
    }
    // Everything before the last delimiter is copied literally.
    let (mut output, input) = match input.rfind(DELIMITER) {
        None => (Vec::new(), input),
        Some(position) => (
            input[..position].chars().collect(),
            if position > 0 { &input[position + 1..] } else { input },
        ),
    };
    let mut code_point = INITIAL_N;
    let mut bias = INITIAL_BIAS;
    let mut i: u32 = 0;
    let mut iter = input.bytes();
    loop {
        let previous_i = i;
        let mut weight = 1;
        let mut k = BASE;
        let mut byte = match iter.next() {
            None => break,
            Some(byte) => byte,
        };
        loop {
            let digit = match byte {
                byte @ b'0'..=b'9' => byte - b'0' + 26,
                byte @ b'A'..=b'Z' => byte - b'A',
                byte @ b'a'..=b'z' => byte - b'a',
                _ => return None,
            } as u32;
            if digit > (u32::MAX - i) / weight {
                return None;
            }
            i += digit * weight;
            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            if weight > u32::MAX / (BASE - t) {
                return None;
            }
            weight *= BASE - t;
            k += BASE;
            byte = iter.next()?;
        }
        let length = output.len() as u32;
        bias = adapt(i - previous_i, length + 1, previous_i == 0);
        if i / (length + 1) > u32::MAX - code_point {
            return None;
        }
        code_point += i / (length + 1);
        i %= length + 1;
        let c = char::from_u32(code_point)?;
        output.insert(i as usize, c);
        i += 1;
    }
    Some(output)
}

/// Convert a Unicode `str` to Punycode.
#[inline]
pub fn encode_str(input: &str) -> Option<String> {
    let mut buf = String::with_capacity(input.len());
    encode_into(input.chars(), &mut buf).ok().map(|()| buf)
}

/// Convert Unicode to Punycode.
///
/// Return None on overflow, which can only happen on inputs that would take more than
/// 63 encoded bytes, the DNS limit on domain name labels.
pub fn encode(input: &[char]) -> Option<String> {
    let mut buf = String::with_capacity(input.len());
    encode_into(input.iter().copied(), &mut buf).ok().map(|()| buf)
}

fn encode_into<I>(input: I, output: &mut String) -> Result<(), ()>
where
    I: Iterator<Item = char> + Clone,
{
    let (mut input_length, mut basic_length) = (0u32, 0u32);
    for c in input.clone() {
        input_length += 1;
        if c.is_ascii() {
            output.push(c);
            basic_length += 1;
        }
    }
    if basic_length > 0 {
        output.push(DELIMITER)
    }
    let mut code_point = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut processed = basic_length;
    while processed < input_length {
        // The smallest code point not handled yet.
        let min_code_point = match input
            .clone()
            .map(|c| c as u32)
            .filter(|&c| c >= code_point)
            .min()
        {
            Some(c) => c,
            None => break,
        };
        if min_code_point - code_point > (u32::MAX - delta) / (processed + 1) {
            return Err(());
        }
        delta += (min_code_point - code_point) * (processed + 1);
        code_point = min_code_point;
        for c in input.clone() {
            let c = c as u32;
            if c < code_point {
                delta = delta.checked_add(1).ok_or(())?;
            }
            if c == code_point {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    let value = t + ((q - t) % (BASE - t));
                    output.push(value_to_digit(value));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(value_to_digit(q));
                bias = adapt(delta, processed + 1, processed == basic_length);
                delta = 0;
                processed += 1;
            }
        }
        delta += 1;
        code_point += 1;
    }
    Ok(())
}

#[inline]
fn value_to_digit(value: u32) -> char {
    match value {
        0..=25 => (value as u8 + b'a') as char,
        26..=35 => (value as u8 - 26 + b'0') as char,
        _ => unreachable!("punycode digit out of range: {}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // (unicode, punycode)
    const SAMPLES: &[(&str, &str)] = &[
        ("bücher", "bcher-kva"),
        ("münchen", "mnchen-3ya"),
        ("faß", "fa-hia"),
        ("ü", "tda"),
        ("例子", "fsqu00a"),
        ("💩", "ls8h"),
        ("☃-⌘", "--dqo34k"),
        ("abc", "abc-"),
        ("Bahnhof-Straße", "Bahnhof-Strae-mdb"),
        ("ليهمابتكلموشعربي؟", "egbpdaj6bu4bxfgehfvwxn"),
    ];

    #[test]
    fn encode_samples() {
        for &(unicode, puny) in SAMPLES {
            assert_eq!(encode_str(unicode).as_deref(), Some(puny), "{}", unicode);
            let chars: Vec<char> = unicode.chars().collect();
            assert_eq!(encode(&chars).as_deref(), Some(puny), "{}", unicode);
        }
    }

    #[test]
    fn decode_samples() {
        for &(unicode, puny) in SAMPLES {
            assert_eq!(decode_to_string(puny).as_deref(), Some(unicode), "{}", puny);
        }
    }

    #[test]
    fn decode_is_case_insensitive_for_digits() {
        assert_eq!(decode_to_string("BCHER-KVA").as_deref(), Some("BüCHER"));
        assert_eq!(decode_to_string("bcher-KVA").as_deref(), Some("bücher"));
    }

    #[test]
    fn decode_empty() {
        assert_eq!(decode_to_string("").as_deref(), Some(""));
    }

    #[test]
    fn decode_rejects_bad_input() {
        assert_eq!(decode("bcher-kv!"), None);
        assert_eq!(decode("bü-kva"), None);
        // Truncated: the last digit still asks for more.
        assert_eq!(decode("bcher-kv9"), None);
        // Overflows the code point accumulator.
        assert_eq!(decode("99999999999"), None);
    }

    #[test]
    fn adapt_first_time() {
        assert_eq!(adapt(0, 1, true), 0);
        assert_eq!(adapt(0, 1, false), 0);
    }

    #[test]
    fn digits() {
        assert_eq!(value_to_digit(0), 'a');
        assert_eq!(value_to_digit(25), 'z');
        assert_eq!(value_to_digit(26), '0');
        assert_eq!(value_to_digit(35), '9');
    }
}
