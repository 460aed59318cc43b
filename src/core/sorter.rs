use crate::domain::model::Course;

/// Sorts the catalog in place, ascending by identifier, using a recursive
/// partition-exchange sort with a midpoint pivot.
///
/// Comparison is ordinary byte-wise `str` ordering, so it is CASE-SENSITIVE.
/// Lookup is case-insensitive; that asymmetry is a documented contract, not
/// an oversight. Ordering is not stable for equal identifiers.
pub fn sort_by_identifier(courses: &mut [Course]) {
    if courses.len() > 1 {
        quick_sort(courses, 0, courses.len() - 1);
    }
}

// Inclusive range [begin, end]; ranges of zero or one elements are sorted.
fn quick_sort(courses: &mut [Course], begin: usize, end: usize) {
    if begin >= end {
        return;
    }

    let midpoint = partition(courses, begin, end);

    quick_sort(courses, begin, midpoint);
    quick_sort(courses, midpoint + 1, end);
}

// Two cursors scan inward from both ends of [begin, end], exchanging
// out-of-place elements until they meet or cross. Returns the final high
// cursor, the split point for the next recursion.
fn partition(courses: &mut [Course], begin: usize, end: usize) -> usize {
    let mut low = begin;
    let mut high = end;

    // Midpoint element is the pivot; its identifier is cloned out so the
    // slice stays free for swapping during the scan.
    let pivot = courses[low + (high - low) / 2].identifier.clone();

    loop {
        while courses[low].identifier < pivot {
            low += 1;
        }
        while courses[high].identifier > pivot {
            high -= 1;
        }

        if low >= high {
            return high;
        }

        courses.swap(low, high);
        low += 1;
        high -= 1;
    }
}
