use crate::Item;

/// Serialize one item. Total: every `Item` has exactly one encoding.
pub fn encode(item: &Item) -> Vec<u8> {
    let mut out = Vec::new();
    write_item(item, &mut out);
    out
}

/// Big-endian bytes of `n` with leading zeros stripped; 0 encodes as empty.
pub fn uint_bytes(n: u128) -> Vec<u8> {
    let be = n.to_be_bytes();
    let skip = be.iter().take_while(|&&b| b == 0).count();
    be[skip..].to_vec()
}

fn write_item(item: &Item, out: &mut Vec<u8>) {
    match item {
        Item::Bytes(b) => write_bytes(b, out),
        Item::List(items) => {
            let mut payload = Vec::new();
            for it in items {
                write_item(it, &mut payload);
            }
            write_len(0xc0, payload.len(), out);
            out.extend_from_slice(&payload);
        }
    }
}

fn write_bytes(b: &[u8], out: &mut Vec<u8>) {
    // a lone byte below 0x80 is its own encoding
    if b.len() == 1 && b[0] < 0x80 {
        out.push(b[0]);
        return;
    }
    write_len(0x80, b.len(), out);
    out.extend_from_slice(b);
}

fn write_len(base: u8, len: usize, out: &mut Vec<u8>) {
    if len < 56 {
        out.push(base + len as u8);
    } else {
        let be = (len as u64).to_be_bytes();
        let skip = be.iter().take_while(|&&b| b == 0).count();
        out.push(base + 55 + (8 - skip) as u8);
        out.extend_from_slice(&be[skip..]);
    }
}
