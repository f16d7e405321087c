//
// Sorting for intersection lists and sweep event queues. The scanline rasterizer calls
// into this once per image row, so both entry points need to stay better than quadratic
// well past tens of thousands of elements: they lean on the standard library's hybrid
// sorts rather than anything hand-rolled.
//

///
/// Sorts a float sequence into ascending order in place
///
/// Accepts any slice length (0 and 1 included) without the caller special-casing.
/// Inputs are expected to be NaN-free; NaNs are ordered by their bit pattern rather
/// than poisoning the sort.
///
#[inline]
pub fn sort_floats(data: &mut [f32]) {
    if data.len() < 2 {
        return;
    }

    data.sort_unstable_by(|a, b| a.total_cmp(b));
}

///
/// Sorts a float key sequence into ascending order, reordering an associated value
/// sequence in step so every key keeps its paired value
///
/// The ordering is stable: values whose keys compare equal keep their relative order.
/// Panics if the two slices differ in length (a caller contract breach).
///
pub fn sort_keys_with_values<T>(keys: &mut [f32], values: &mut [T]) {
    assert!(
        keys.len() == values.len(),
        "Cannot sort: key and value slices must be the same length ({} != {})", keys.len(), values.len()
    );

    if keys.len() < 2 {
        return;
    }

    if keys.len() == 2 {
        if keys[0] > keys[1] {
            keys.swap(0, 1);
            values.swap(0, 1);
        }

        return;
    }

    // Sort a permutation of the indices by key, then apply it to both slices
    let mut order = (0..keys.len()).collect::<Vec<_>>();
    order.sort_by(|a, b| keys[*a].total_cmp(&keys[*b]));

    apply_permutation(&mut order, keys, values);
}

///
/// Rearranges `keys` and `values` so element `i` ends up holding the element that was
/// at `order[i]`, walking each permutation cycle with swaps
///
/// `order` is consumed as cycle bookkeeping and is left in an unspecified state.
///
fn apply_permutation<T>(order: &mut [usize], keys: &mut [f32], values: &mut [T]) {
    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }

        // Rotate this cycle into place; marking visited slots with their own index
        // stops us walking the same cycle twice
        let mut prev    = start;
        let mut current = order[start];

        while current != start {
            keys.swap(prev, current);
            values.swap(prev, current);

            let next        = order[current];
            order[current]  = current;
            prev            = current;
            current         = next;
        }

        order[start] = start;
    }
}
