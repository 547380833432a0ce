use huffman_codec::huffman::{
    build_table, decode, encode_with_table, format_bits, CodingError, Frequencies,
};

fn main() -> Result<(), CodingError> {
    // symbol-frequency pairs
    let syms_and_freqs: Frequencies =
        [(0, 10), (1, 2), (2, 24), (3, 340), (4, 10), (5, 11), (-70_000, 1)]
            .into_iter()
            .collect();

    let table = build_table(&syms_and_freqs)?;
    println!("huffman table\n{}", table);

    let sequence_to_encode: Vec<i64> = vec![3, 3, 3, 2, 1, 4, 5, 3, 3, 3, -70_000];
    let encoded = encode_with_table(&table, &sequence_to_encode)?;
    println!("sequence to encode\n{:?}", sequence_to_encode);
    println!("encoded sequence ({} bits)\n{}", encoded.len(), format_bits(&encoded));

    let decoded = decode(&table, &encoded)?;
    println!("decoded sequence\n{:?}", decoded);
    Ok(())
}
