use crate::model::Units;

/// Which participants absorb the leftover smallest units of an uneven split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RemainderPolicy {
    /// The first `remainder` participants in input order.
    #[default]
    InputOrder,
    /// The `remainder` participants starting at `offset % n`, wrapping around.
    RotateFrom(usize),
}

impl RemainderPolicy {
    fn start(self, count: usize) -> usize {
        match self {
            RemainderPolicy::InputOrder => 0,
            RemainderPolicy::RotateFrom(offset) => offset % count,
        }
    }
}

pub struct ShareAllocator;

impl ShareAllocator {
    /// Splits `total` into `count` shares that sum exactly to `total` and differ by at most one unit.
    pub fn allocate(total: Units, count: usize, policy: RemainderPolicy) -> Vec<Units> {
        if count == 0 {
            return Vec::new();
        }

        let divisor = count as i64;
        let base = total.amount().div_euclid(divisor);
        let remainder = total.amount().rem_euclid(divisor) as usize;
        let start = policy.start(count);

        (0..count)
            .map(|idx| {
                let rank = (idx + count - start) % count;
                if rank < remainder {
                    Units::from_i64(base + 1)
                } else {
                    Units::from_i64(base)
                }
            })
            .collect()
    }
}
