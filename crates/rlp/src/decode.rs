use crate::{Item, Result, RlpError};

/// Hard limits to prevent OOM / pathological inputs. A signed transaction is
/// a few hundred bytes; anything near these caps is garbage.
pub const MAX_RLP_BYTES: usize = 1 << 20; // 1 MiB of input
pub const MAX_RLP_DEPTH: usize = 16; // nesting levels

/// Parse exactly one item from `input`. Leftover bytes are an error, as are
/// any non-minimal length forms.
pub fn decode(input: &[u8]) -> Result<Item> {
    if input.len() > MAX_RLP_BYTES {
        return Err(RlpError::Malformed);
    }
    let (item, used) = read_item(input, 0)?;
    if used != input.len() {
        return Err(RlpError::TrailingBytes);
    }
    Ok(item)
}

/// Coerce an integer field. Leading zeros and widths over 16 bytes are not
/// canonical for a `u128` and are rejected.
pub fn uint(b: &[u8]) -> Result<u128> {
    if b.len() > 16 || b.first() == Some(&0) {
        return Err(RlpError::BadFieldType);
    }
    let mut n: u128 = 0;
    for &byte in b {
        n = (n << 8) | u128::from(byte);
    }
    Ok(n)
}

/// Enforce a fixed list arity.
pub fn expect_arity(items: &[Item], expected: usize) -> Result<()> {
    if items.len() != expected {
        return Err(RlpError::BadArity {
            expected,
            got: items.len(),
        });
    }
    Ok(())
}

fn read_item(input: &[u8], depth: usize) -> Result<(Item, usize)> {
    if depth > MAX_RLP_DEPTH {
        return Err(RlpError::Malformed);
    }
    let &first = input.first().ok_or(RlpError::Malformed)?;
    match first {
        0x00..=0x7f => Ok((Item::Bytes(vec![first]), 1)),
        0x80..=0xb7 => {
            let len = (first - 0x80) as usize;
            let body = body_slice(input, 1, len)?;
            // a single byte below 0x80 must use the one-byte form
            if len == 1 && body[0] < 0x80 {
                return Err(RlpError::Malformed);
            }
            Ok((Item::Bytes(body.to_vec()), 1 + len))
        }
        0xb8..=0xbf => {
            let lol = (first - 0xb7) as usize;
            let len = read_long_len(body_slice(input, 1, lol)?)?;
            let body = body_slice(input, 1 + lol, len)?;
            Ok((Item::Bytes(body.to_vec()), 1 + lol + len))
        }
        0xc0..=0xf7 => {
            let len = (first - 0xc0) as usize;
            let body = body_slice(input, 1, len)?;
            Ok((Item::List(read_list(body, depth + 1)?), 1 + len))
        }
        0xf8..=0xff => {
            let lol = (first - 0xf7) as usize;
            let len = read_long_len(body_slice(input, 1, lol)?)?;
            let body = body_slice(input, 1 + lol, len)?;
            Ok((Item::List(read_list(body, depth + 1)?), 1 + lol + len))
        }
    }
}

fn read_list(mut body: &[u8], depth: usize) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    while !body.is_empty() {
        let (item, used) = read_item(body, depth)?;
        items.push(item);
        body = &body[used..];
    }
    Ok(items)
}

/// Length of a long-form payload: big-endian, no leading zero, and it must
/// actually need the long form.
fn read_long_len(be: &[u8]) -> Result<usize> {
    if be.is_empty() || be[0] == 0 {
        return Err(RlpError::Malformed);
    }
    let mut len = 0usize;
    for &b in be {
        len = len
            .checked_mul(256)
            .and_then(|l| l.checked_add(b as usize))
            .ok_or(RlpError::Malformed)?;
    }
    if len < 56 {
        return Err(RlpError::Malformed);
    }
    Ok(len)
}

fn body_slice(input: &[u8], start: usize, len: usize) -> Result<&[u8]> {
    let end = start.checked_add(len).ok_or(RlpError::Malformed)?;
    input.get(start..end).ok_or(RlpError::Malformed)
}
