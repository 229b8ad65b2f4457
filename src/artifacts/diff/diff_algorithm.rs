use derive_new::new;
use std::ops::{Index, IndexMut, Range};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

pub trait DiffAlgorithm<T> {
    type EditScript;

    fn diff(&self) -> Self::EditScript;
}

/// Myers' O(ND) diff in linear space
///
/// The shortest edit script keeps a longest common subsequence of `a` and
/// `b` as its `Equal` edits. Each subproblem is split at its middle snake,
/// so memory stays proportional to `a.len() + b.len()`.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

/// Furthest-reaching `x` per diagonal `k`, for `k` in `-max..=max`
#[derive(Debug)]
struct Frontier {
    offset: isize,
    xs: Vec<isize>,
}

impl Frontier {
    fn new(max: isize) -> Self {
        Frontier {
            offset: max,
            xs: vec![0; (2 * max + 1) as usize],
        }
    }
}

impl Index<isize> for Frontier {
    type Output = isize;

    fn index(&self, k: isize) -> &isize {
        &self.xs[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut isize {
        &mut self.xs[(k + self.offset) as usize]
    }
}

/// Most edit rounds a middle-snake search over `n + m` elements needs
fn max_rounds(n: usize, m: usize) -> isize {
    ((n + m + 1) / 2 + 1) as isize
}

impl<T: Eq + Clone> MyersDiff<'_, T> {
    fn common_prefix(&self, a: Range<usize>, b: Range<usize>) -> usize {
        self.a[a]
            .iter()
            .zip(&self.b[b])
            .take_while(|(x, y)| x == y)
            .count()
    }

    fn common_suffix(&self, a: Range<usize>, b: Range<usize>) -> usize {
        self.a[a]
            .iter()
            .rev()
            .zip(self.b[b].iter().rev())
            .take_while(|(x, y)| x == y)
            .count()
    }

    /// Point where the forward and backward searches over `a` x `b` meet
    ///
    /// Both ranges must be non-empty and differ in their first and last
    /// elements. Returns absolute positions in `self.a` and `self.b`.
    fn middle_snake(
        &self,
        a: Range<usize>,
        b: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
    ) -> Option<(usize, usize)> {
        let (n, m) = (a.len() as isize, b.len() as isize);
        let delta = n - m;
        let odd = delta & 1 == 1;

        forward[1] = 0;
        backward[1] = 0;

        for d in 0..max_rounds(a.len(), b.len()) {
            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && forward[k - 1] < forward[k + 1]) {
                    forward[k + 1]
                } else {
                    forward[k - 1] + 1
                };
                let (x0, y0) = (x, x - k);

                if x < n && y0 < m {
                    x += self.common_prefix(
                        a.start + x as usize..a.end,
                        b.start + y0 as usize..b.end,
                    ) as isize;
                }
                forward[k] = x;

                if odd && (k - delta).abs() < d && x + backward[delta - k] >= n {
                    return Some((a.start + x0 as usize, b.start + y0 as usize));
                }
            }

            // x and y count back from the ends of the ranges
            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && backward[k - 1] < backward[k + 1]) {
                    backward[k + 1]
                } else {
                    backward[k - 1] + 1
                };
                let mut y = x - k;

                if x < n && y < m {
                    let shared = self.common_suffix(
                        a.start..a.end - x as usize,
                        b.start..b.end - y as usize,
                    ) as isize;
                    x += shared;
                    y += shared;
                }
                backward[k] = x;

                if !odd && (k - delta).abs() <= d && x + forward[delta - k] >= n {
                    return Some((a.end - x as usize, b.end - y as usize));
                }
            }
        }

        None
    }

    fn conquer(
        &self,
        mut a: Range<usize>,
        mut b: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
        edits: &mut Vec<Edit<T>>,
    ) {
        let prefix = self.common_prefix(a.clone(), b.clone());
        self.push_equal(a.start..a.start + prefix, edits);
        a.start += prefix;
        b.start += prefix;

        let suffix = self.common_suffix(a.clone(), b.clone());
        a.end -= suffix;
        b.end -= suffix;

        if a.is_empty() {
            self.push_inserts(b.clone(), edits);
        } else if b.is_empty() {
            self.push_deletes(a.clone(), edits);
        } else if let Some((x, y)) = self.middle_snake(a.clone(), b.clone(), forward, backward) {
            self.conquer(a.start..x, b.start..y, forward, backward, edits);
            self.conquer(x..a.end, y..b.end, forward, backward, edits);
        } else {
            self.push_deletes(a.clone(), edits);
            self.push_inserts(b.clone(), edits);
        }

        self.push_equal(a.end..a.end + suffix, edits);
    }

    fn push_equal(&self, a: Range<usize>, edits: &mut Vec<Edit<T>>) {
        edits.extend(self.a[a].iter().map(|value| Edit::Equal {
            value: value.clone(),
        }));
    }

    fn push_deletes(&self, a: Range<usize>, edits: &mut Vec<Edit<T>>) {
        edits.extend(self.a[a].iter().map(|value| Edit::Delete {
            value: value.clone(),
        }));
    }

    fn push_inserts(&self, b: Range<usize>, edits: &mut Vec<Edit<T>>) {
        edits.extend(self.b[b].iter().map(|value| Edit::Insert {
            value: value.clone(),
        }));
    }
}

impl<T: Eq + Clone> DiffAlgorithm<T> for MyersDiff<'_, T> {
    type EditScript = Vec<Edit<T>>;

    /// Edit script with deletions ahead of insertions inside each changed run
    fn diff(&self) -> Self::EditScript {
        let rounds = max_rounds(self.a.len(), self.b.len());
        let mut forward = Frontier::new(rounds);
        let mut backward = Frontier::new(rounds);

        let mut edits = Vec::with_capacity(self.a.len() + self.b.len());
        self.conquer(
            0..self.a.len(),
            0..self.b.len(),
            &mut forward,
            &mut backward,
            &mut edits,
        );

        let mut script = Vec::with_capacity(edits.len());
        let mut inserts = Vec::new();
        for edit in edits {
            match edit {
                Edit::Insert { .. } => inserts.push(edit),
                Edit::Delete { .. } => script.push(edit),
                Edit::Equal { .. } => {
                    script.append(&mut inserts);
                    script.push(edit);
                }
            }
        }
        script.append(&mut inserts);

        script
    }
}
