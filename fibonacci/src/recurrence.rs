/// Applies the Fibonacci recurrence `remaining` times to the accumulator pair
/// `(a, b)` and returns the final `b`.
///
/// Equivalent to the tail-recursive form
/// `step(a, b, 0) = b`, `step(a, b, n) = step(b, a + b, n - 1)`,
/// unrolled into a loop so large step counts do not grow the stack.
/// Exactly `remaining` additions are performed, all wrapping in `u64`.
///
/// Seeding matters: only `(0, 1)` yields Fibonacci terms, and only for
/// indices of at least 2. Callers go through [`crate::fibonacci`].
pub(crate) const fn step(mut a: u64, mut b: u64, mut remaining: u64) -> u64 {
    while remaining != 0 {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
        remaining -= 1;
    }
    b
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn zero_steps_returns_second_accumulator() {
        assert_eq!(step(7, 11, 0), 11);
        assert_eq!(step(0, 0, 0), 0);
        assert_eq!(step(u64::MAX, 3, 0), 3);
    }

    #[test]
    fn single_step_adds_accumulators() {
        assert_eq!(step(2, 3, 1), 5);
        assert_eq!(step(0, 1, 1), 1);
    }

    #[test]
    fn unrolls_like_the_tail_recursion() {
        fn recursive(a: u64, b: u64, remaining: u64) -> u64 {
            if remaining == 0 {
                b
            } else {
                recursive(b, a.wrapping_add(b), remaining - 1)
            }
        }

        for (a, b) in [(0, 1), (2, 1), (5, 8), (u64::MAX, 1), (13, u64::MAX - 4)] {
            for remaining in 0..50 {
                assert_eq!(step(a, b, remaining), recursive(a, b, remaining));
            }
        }
    }

    #[test]
    fn seeded_steps_match_known_terms() {
        // step(0, 1, n - 1) is the n-th term
        assert_eq!(step(0, 1, 1), 1);
        assert_eq!(step(0, 1, 9), 55);
        assert_eq!(step(0, 1, 19), 6765);
    }

    #[test]
    fn wraps_on_overflow() {
        assert_eq!(step(u64::MAX, 1, 1), 0);
        assert_eq!(step(1, u64::MAX, 2), u64::MAX);
    }

    #[test]
    fn large_step_count_does_not_exhaust_the_stack() {
        // Far deeper than any default thread stack would allow for a
        // non-eliminated tail call.
        let expected = {
            let (mut a, mut b) = (0u64, 1u64);
            for _ in 0..10_000_000u64 {
                let next = a.wrapping_add(b);
                a = b;
                b = next;
            }
            b
        };
        assert_eq!(step(0, 1, 10_000_000), expected);
    }
}
