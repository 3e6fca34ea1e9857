//! Forward and inverse Burrows-Wheeler transforms for one block.

use std::cmp::Ordering;

/// Transform one block.
///
/// Conceptually sorts all rotations of `block` lexicographically and
/// returns the last column plus the sorted position of the original
/// block. Implemented as an index sort with modular comparison, which
/// avoids materializing the rotation table.
pub(crate) fn transform(block: &[u8]) -> (Vec<u8>, usize) {
    let n = block.len();
    if n == 0 {
        return (Vec::new(), 0);
    }

    let mut indices: Vec<usize> = (0..n).collect();
    indices.sort_by(|&a, &b| {
        for i in 0..n {
            match block[(a + i) % n].cmp(&block[(b + i) % n]) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    });

    // Equal rotations only occur in periodic blocks, where every such
    // row reconstructs the same bytes, so the tie order is immaterial.
    let primary = indices
        .iter()
        .position(|&i| i == 0)
        .expect("rotation 0 is always present");
    let last_column = indices.iter().map(|&i| block[(i + n - 1) % n]).collect();

    (last_column, primary)
}

/// Invert one block from its last column and primary index.
///
/// Counting construction equivalent to the textbook prepend-then-sort
/// table: `next[i]` chains each row of the sorted matrix to the row
/// holding the rest of the original text.
pub(crate) fn inverse(last_column: &[u8], primary: usize) -> Vec<u8> {
    let n = last_column.len();
    if n == 0 {
        return Vec::new();
    }

    let mut counts = [0usize; 256];
    for &byte in last_column {
        counts[usize::from(byte)] += 1;
    }

    let mut positions = [0usize; 256];
    let mut total = 0;
    for (position, &count) in positions.iter_mut().zip(&counts) {
        *position = total;
        total += count;
    }

    let mut next = vec![0usize; n];
    for (i, &byte) in last_column.iter().enumerate() {
        next[positions[usize::from(byte)]] = i;
        positions[usize::from(byte)] += 1;
    }

    let mut output = Vec::with_capacity(n);
    let mut index = next[primary];
    for _ in 0..n {
        output.push(last_column[index]);
        index = next[index];
    }

    output
}
