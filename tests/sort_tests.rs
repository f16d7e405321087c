use shape_raster::geometry::sort::*;

///
/// Simple deterministic pseudo-random sequence (no external dependency needed)
///
fn pseudo_random_floats(count: usize, seed: u64) -> Vec<f32> {
    let mut state = seed;

    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 33) % 100_000) as f32 / 100.0
        })
        .collect()
}

#[test]
fn key_sort_matches_standard_sort() {
    for size in [0usize, 1, 2, 3, 10, 1000, 5000].iter().copied() {
        let mut data     = pseudo_random_floats(size, 42);
        let mut expected = data.clone();

        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        sort_floats(&mut data);

        assert!(data == expected, "Mismatch at size {}", size);
    }
}

#[test]
fn key_sort_handles_duplicates() {
    let mut data = vec![5.0, 1.0, 5.0, 1.0, 5.0, 3.0, 3.0];
    sort_floats(&mut data);

    assert!(data == vec![1.0, 1.0, 3.0, 3.0, 5.0, 5.0, 5.0], "Found {:?}", data);
}

#[test]
fn paired_sort_keeps_associations() {
    for size in [0usize, 1, 2, 5, 100, 2500].iter().copied() {
        let original_keys = pseudo_random_floats(size, 99);

        let mut keys   = original_keys.clone();
        let mut values = (0..size).collect::<Vec<_>>();

        sort_keys_with_values(&mut keys, &mut values);

        // Keys are ascending
        for pair in keys.windows(2) {
            assert!(pair[0] <= pair[1], "Keys out of order at size {}: {:?}", size, pair);
        }

        // Every key still sits beside the value it started with
        for (key, value) in keys.iter().zip(values.iter()) {
            assert!(
                original_keys[*value] == *key,
                "Association broken at size {}: key {} paired with original index {}", size, key, value
            );
        }
    }
}

#[test]
fn paired_sort_with_many_duplicate_keys() {
    let mut keys   = vec![1.0; 500];
    let mut values = (0..500).collect::<Vec<_>>();

    sort_keys_with_values(&mut keys, &mut values);

    // Stable: equal keys keep their relative value order
    assert!(values == (0..500).collect::<Vec<_>>(), "Duplicate keys should not reorder values");
}

#[test]
#[should_panic]
fn paired_sort_rejects_mismatched_lengths() {
    let mut keys   = vec![1.0, 2.0];
    let mut values = vec![1];

    sort_keys_with_values(&mut keys, &mut values);
}
