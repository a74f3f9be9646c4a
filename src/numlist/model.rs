/// The list every session starts from unless configured otherwise.
pub const DEFAULT_SEED: [i64; 8] = [15, 80, 46, 35, 71, 13, 22, 98];

/// The ordered sequence of integers a session manages.
///
/// Insertion order is the canonical order: it is what `list` shows, what
/// `remove` indexes into and what `export` writes. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberList {
    numbers: Vec<i64>,
}

impl NumberList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::from(DEFAULT_SEED.to_vec())
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn push(&mut self, value: i64) {
        self.numbers.push(value);
    }

    /// Removes the element at `index`, keeping the others in order.
    pub fn remove(&mut self, index: usize) -> Option<i64> {
        if index < self.numbers.len() {
            Some(self.numbers.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.numbers.clone()
    }
}

impl From<Vec<i64>> for NumberList {
    fn from(numbers: Vec<i64>) -> Self {
        Self { numbers }
    }
}

/// Renders numbers the way every list message shows them: `[15 80 46]`.
pub fn format_numbers(numbers: &[i64]) -> String {
    let joined = numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", joined)
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct ListFixture {
        pub list: NumberList,
    }

    impl Default for ListFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ListFixture {
        pub fn new() -> Self {
            Self {
                list: NumberList::new(),
            }
        }

        pub fn seeded() -> Self {
            Self {
                list: NumberList::seeded(),
            }
        }

        pub fn with_numbers(mut self, numbers: &[i64]) -> Self {
            for n in numbers {
                self.list.push(*n);
            }
            self
        }

        pub fn with_odds(mut self, count: usize) -> Self {
            for i in 0..count {
                self.list.push((i as i64) * 2 + 1);
            }
            self
        }

        pub fn build(self) -> NumberList {
            self.list
        }
    }
}
