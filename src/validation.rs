/// Validation tests across the whole encode/decode pipeline.
///
/// These tests verify:
/// 1. **Round-trip correctness** for a broad set of test vectors
/// 2. **Code properties** - prefix-freedom, coverage, length monotonicity
/// 3. **Determinism** - rebuilding gives the same tree, both tie-breaks are optimal
/// 4. **Edge cases** - empty input, single symbol, deep trees, foreign trees
#[cfg(test)]
mod tests {
    use crate::bits::BitString;
    use crate::codec::{self, Codec};
    use crate::frequency::get_frequency;
    use crate::tree::{BuildOptions, HuffmanTree, TieBreak};
    use crate::HuffError;

    // ---------------------------------------------------------------
    // Helper: generate diverse test vectors
    // ---------------------------------------------------------------

    fn data_all_zeros(n: usize) -> Vec<u8> {
        vec![0u8; n]
    }

    /// Every byte value once (uniform distribution, 8 bits entropy).
    fn data_uniform() -> Vec<u8> {
        (0..=255u8).collect()
    }

    /// 90% one byte, 10% another.
    fn data_skewed(n: usize) -> Vec<u8> {
        (0..n).map(|i| if i % 10 == 0 { 1 } else { 0 }).collect()
    }

    fn data_repeating_text() -> Vec<u8> {
        b"the quick brown fox jumps over the lazy dog. ".repeat(100)
    }

    /// Pseudo-random bytes with a lopsided distribution.
    fn data_lcg(n: usize) -> Vec<u8> {
        let mut state = 0x2545_f491u32;
        (0..n)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let r = (state >> 16) as u8;
                (r & (r >> 1)) | (r >> 4)
            })
            .collect()
    }

    /// Fibonacci weights produce the deepest possible tree for their size.
    fn data_fibonacci(symbols: u8) -> Vec<u8> {
        let (mut a, mut b) = (1usize, 1usize);
        let mut v = Vec::new();
        for s in 0..symbols {
            v.extend(std::iter::repeat(s).take(a));
            (a, b) = (b, a + b);
        }
        v
    }

    fn lifo() -> BuildOptions {
        BuildOptions {
            tie_break: TieBreak::Lifo,
        }
    }

    // ---------------------------------------------------------------
    // 1. Round-trip and property validation per vector
    // ---------------------------------------------------------------

    macro_rules! huffman_test {
        ($name:ident, $data:expr) => {
            mod $name {
                use super::*;

                #[test]
                fn round_trip() {
                    let input = $data;
                    let encoding = codec::encode(&input);
                    let decoded = codec::decode(&encoding.bits, encoding.tree.as_ref()).unwrap();
                    assert_eq!(decoded, input, "fifo round-trip failed");
                }

                #[test]
                fn round_trip_lifo() {
                    let input = $data;
                    let encoding = codec::encode_with(&input, lifo());
                    let decoded = codec::decode(&encoding.bits, encoding.tree.as_ref()).unwrap();
                    assert_eq!(decoded, input, "lifo round-trip failed");
                }

                #[test]
                fn round_trip_packed() {
                    let input = $data;
                    let encoding = codec::encode(&input);
                    let (bytes, bit_len) = encoding.bits.to_bytes();
                    let unpacked = BitString::from_bytes(&bytes, bit_len).unwrap();
                    let decoded = codec::decode(&unpacked, encoding.tree.as_ref()).unwrap();
                    assert_eq!(decoded, input, "packed round-trip failed");
                }

                #[test]
                fn session() {
                    let input = $data;
                    let mut session = Codec::new();
                    let bits = session.encode(&input);
                    assert_eq!(session.decode(&bits).unwrap(), input);
                }

                #[test]
                fn code_properties() {
                    let input = $data;
                    let freq = get_frequency(&input);
                    let encoding = codec::encode(&input);
                    let table = &encoding.table;

                    assert_eq!(table.len(), freq.len(), "coverage");
                    assert!(table.is_prefix_free(), "codes are not prefix-free");
                    assert!(table.iter().all(|(_, code)| !code.is_empty()), "empty code");
                    assert_eq!(encoding.bits.len() as u64, table.encoded_len(&freq));

                    for (a, fa) in freq.iter() {
                        for (b, fb) in freq.iter() {
                            if fa < fb {
                                assert!(table.get(a).unwrap().len() >= table.get(b).unwrap().len());
                            }
                        }
                    }
                }

                #[test]
                fn tie_breaks_are_equally_optimal() {
                    let input = $data;
                    let fifo = codec::encode(&input);
                    let lifo = codec::encode_with(&input, lifo());
                    assert_eq!(fifo.bits.len(), lifo.bits.len());
                }

                #[test]
                fn deterministic() {
                    let input = $data;
                    assert_eq!(codec::encode(&input), codec::encode(&input));
                }

                #[test]
                fn entropy_bound() {
                    let input = $data;
                    let freq = get_frequency(&input);
                    if freq.len() < 2 {
                        return;
                    }
                    let table = codec::encode(&input).table;
                    let entropy = freq.entropy();
                    let average = table.average_code_length(&freq);
                    assert!(average >= entropy - 1e-9, "{} < {}", average, entropy);
                    assert!(average < entropy + 1.0, "{} >= {} + 1", average, entropy);
                }
            }
        };
    }

    huffman_test!(ht_empty, Vec::<u8>::new());
    huffman_test!(ht_zeros_100, data_all_zeros(100));
    huffman_test!(ht_uniform, data_uniform());
    huffman_test!(ht_skewed_1000, data_skewed(1000));
    huffman_test!(ht_repeating_text, data_repeating_text());
    huffman_test!(ht_lcg_4096, data_lcg(4096));
    huffman_test!(ht_fibonacci, data_fibonacci(20));
    huffman_test!(ht_single_byte, vec![42u8]);
    huffman_test!(ht_two_bytes, vec![0u8, 255]);
    huffman_test!(ht_unicode, "naïve café ✓ Ωmega ✓✓".chars().collect::<Vec<char>>());

    // ---------------------------------------------------------------
    // 2. Edge cases
    // ---------------------------------------------------------------

    #[test]
    fn fibonacci_tree_is_maximally_deep() {
        let input = data_fibonacci(20);
        let tree = HuffmanTree::from_data(&input).unwrap();
        assert_eq!(tree.max_code_length(), 19);
    }

    #[test]
    fn hello_world_scenario() {
        let encoding = codec::encode_str("Hello, World!");
        let freq = get_frequency(&"Hello, World!".chars().collect::<Vec<_>>());
        assert_eq!(freq.get(&'l'), 3);
        assert_eq!(freq.get(&'o'), 2);
        let text = encoding.bits.to_string();
        assert!(text.chars().all(|c| c == '0' || c == '1'));
        assert_eq!(
            codec::decode_str(&text, encoding.tree.as_ref()).unwrap(),
            "Hello, World!"
        );
    }

    #[test]
    fn stale_tree_is_rejected_or_differs() {
        // A bit-string decoded against the wrong tree never silently
        // reproduces the original text.
        let mut session: Codec<char> = Codec::new();
        let bits = session.encode_str("abcdefgh");
        session.encode_str("xy");
        match session.decode_str(&bits) {
            Ok(text) => assert_ne!(text, "abcdefgh"),
            Err(e) => assert!(matches!(
                e,
                HuffError::TruncatedCode { .. } | HuffError::InvalidBitSequence { .. }
            )),
        }
    }

    #[test]
    fn every_error_has_a_message() {
        let errors = [
            HuffError::MalformedBit {
                position: 3,
                found: '2',
            },
            HuffError::NoTree,
            HuffError::InvalidBitSequence { position: 0 },
            HuffError::TruncatedCode { consumed: 7 },
            HuffError::UnknownSymbol,
            HuffError::PackedLengthMismatch {
                bit_len: 9,
                available: 8,
            },
            HuffError::CountOverflow,
        ];
        for e in errors {
            assert!(!e.to_string().is_empty());
        }
        assert_eq!(
            HuffError::NoTree.to_string(),
            "decode attempted with no tree available"
        );
    }
}
