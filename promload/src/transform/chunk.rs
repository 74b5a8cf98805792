// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use std::num::NonZeroUsize;

/// Split `items` into consecutive chunks of `chunk_size` items. Only the last chunk may be
/// shorter.
///
/// An empty input yields exactly one empty chunk, so callers always submit at least once per
/// metric. Sinks must accept an empty chunk.
pub fn partition<T>(items: &[T], chunk_size: NonZeroUsize) -> Vec<&[T]> {
  let chunk_size = chunk_size.get();
  let mut chunks = Vec::with_capacity(items.len() / chunk_size + 1);

  let mut remaining = items;
  while remaining.len() > chunk_size {
    let (chunk, rest) = remaining.split_at(chunk_size);
    chunks.push(chunk);
    remaining = rest;
  }
  chunks.push(remaining);

  chunks
}

#[cfg(test)]
mod tests {
  use super::*;

  use test_case::test_case;

  fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
  }

  #[test_case(1, 1; "when a single item fits a chunk of one")]
  #[test_case(10, 3; "when the last chunk is shorter")]
  #[test_case(9, 3; "when the input divides evenly")]
  #[test_case(5, 10; "when the chunk is larger than the input")]
  #[test_case(10_001, 10_000; "when the input is one past the default chunk size")]
  fn test_partition(num_items: usize, chunk_size: usize) {
    let items: Vec<usize> = (0..num_items).collect();
    let chunks = partition(&items, size(chunk_size));

    // Concatenating the chunks gives back the input.
    assert_eq!(chunks.concat(), items);

    let (last, rest) = chunks.split_last().unwrap();
    assert!(rest.iter().all(|chunk| chunk.len() == chunk_size));
    assert!(!last.is_empty() && last.len() <= chunk_size);
    assert_eq!(chunks.len(), num_items.div_ceil(chunk_size));
  }

  #[test]
  fn test_partition_empty() {
    let items: Vec<u32> = Vec::new();
    for chunk_size in [1, 2, 10_000] {
      let chunks = partition(&items, size(chunk_size));
      assert_eq!(chunks.len(), 1);
      assert!(chunks[0].is_empty());
    }
  }

  #[test]
  fn test_partition_keeps_input() {
    let items = vec!["c", "a", "b"];
    let chunks = partition(&items, size(2));
    assert_eq!(chunks, vec![&["c", "a"][..], &["b"][..]]);
    assert_eq!(items, vec!["c", "a", "b"]);
  }
}
