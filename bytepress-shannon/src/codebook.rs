//! Shannon-Fano code table construction.

use bytepress_core::BitCode;

/// One distinct input byte with its frequency and assigned code.
#[derive(Debug, Clone)]
pub(crate) struct SymbolRecord {
    pub symbol: u8,
    pub freq: u64,
    pub code: BitCode,
}

/// Build the symbol records: distinct bytes ordered by decreasing
/// frequency (ties by ascending byte value), each carrying its code.
///
/// A lone symbol takes the one-bit code `0`; otherwise codes come from
/// the recursive frequency split.
pub(crate) fn build(freqs: &[u64; 256]) -> Vec<SymbolRecord> {
    let mut records: Vec<SymbolRecord> = freqs
        .iter()
        .enumerate()
        .filter(|&(_, &freq)| freq > 0)
        .map(|(byte, &freq)| SymbolRecord {
            symbol: byte as u8,
            freq,
            code: BitCode::new(),
        })
        .collect();
    records.sort_by(|a, b| b.freq.cmp(&a.freq).then(a.symbol.cmp(&b.symbol)));

    match records.len() {
        0 => {}
        1 => records[0].code.push(false),
        len => divide(&mut records, 0, len),
    }
    records
}

/// Assign one bit level to `[lo, hi)` and recurse.
///
/// The split point is the first position where the left and right
/// frequency sums balance best; the left part takes a `0` bit, the
/// right part a `1`. Ranges of fewer than two symbols are already
/// fully coded and are left alone.
fn divide(records: &mut [SymbolRecord], lo: usize, hi: usize) {
    if hi - lo < 2 {
        return;
    }

    let total: u64 = records[lo..hi].iter().map(|r| r.freq).sum();
    let mut sum = 0u64;
    let mut best = total;
    let mut mid = lo;
    for (i, record) in records[lo..hi].iter().enumerate() {
        sum += record.freq;
        let diff = (2 * sum).abs_diff(total);
        if diff < best {
            best = diff;
            mid = lo + i;
        }
    }

    for record in &mut records[lo..=mid] {
        record.code.push(false);
    }
    for record in &mut records[mid + 1..hi] {
        record.code.push(true);
    }

    divide(records, lo, mid + 1);
    divide(records, mid + 1, hi);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freqs_of(input: &[u8]) -> [u64; 256] {
        let mut freqs = [0u64; 256];
        for &byte in input {
            freqs[usize::from(byte)] += 1;
        }
        freqs
    }

    fn code_string(code: &BitCode) -> String {
        (0..code.len())
            .map(|i| if code.bit(i) { '1' } else { '0' })
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(build(&[0u64; 256]).is_empty());
    }

    #[test]
    fn test_single_symbol_gets_zero_bit() {
        let records = build(&freqs_of(b"zzzz"));
        assert_eq!(records.len(), 1);
        assert_eq!(code_string(&records[0].code), "0");
    }

    #[test]
    fn test_known_split() {
        // A:2 B:2 C:1 splits into {A} and {B, C}.
        let records = build(&freqs_of(b"AABBC"));
        let codes: Vec<(u8, String)> = records
            .iter()
            .map(|r| (r.symbol, code_string(&r.code)))
            .collect();
        assert_eq!(
            codes,
            vec![
                (b'A', "0".to_string()),
                (b'B', "10".to_string()),
                (b'C', "11".to_string()),
            ]
        );
    }

    #[test]
    fn test_frequency_ties_order_by_byte() {
        let records = build(&freqs_of(b"badc"));
        let symbols: Vec<u8> = records.iter().map(|r| r.symbol).collect();
        assert_eq!(symbols, b"abcd");
    }

    #[test]
    fn test_prefix_free() {
        let records = build(&freqs_of(b"abracadabra schwabracadabra"));
        for a in &records {
            for b in &records {
                if a.symbol == b.symbol {
                    continue;
                }
                let (short, long) = (code_string(&a.code), code_string(&b.code));
                assert!(
                    !long.starts_with(&short),
                    "{} is a prefix of {}",
                    short,
                    long
                );
            }
        }
    }

    #[test]
    fn test_more_frequent_symbols_get_no_longer_codes() {
        let records = build(&freqs_of(b"aaaaaaaabbbbccd"));
        for pair in records.windows(2) {
            assert!(pair[0].code.len() <= pair[1].code.len());
        }
    }
}
