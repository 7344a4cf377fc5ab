//! Calorie counting.
//!
//! Each elf's inventory is a run of integers, one per line; a blank line
//! ends the run. The answer is the elf carrying the most.

use aoc_core::InputError;

/// The elf with the largest total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Best {
    /// 1-based position of the elf in the input.
    pub elf: usize,
    pub calories: u64,
}

/// Running totals over a stream of inventory lines.
#[derive(Debug, Default)]
pub struct Tally {
    current_elf: usize,
    current: u64,
    open: bool,
    best: Option<Best>,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one item to the current elf.
    ///
    /// Returns the elf's running total, or `None` if it would overflow, in
    /// which case the tally is unchanged.
    pub fn add(&mut self, calories: u64) -> Option<u64> {
        self.current = self.current.checked_add(calories)?;
        self.open = true;
        Some(self.current)
    }

    /// Close the current elf's inventory.
    ///
    /// Every separator ends one elf, so consecutive separators count empty
    /// elves. An empty elf never wins. Ties keep the earlier elf.
    pub fn close(&mut self) {
        if self.open {
            let candidate = Best {
                elf: self.current_elf + 1,
                calories: self.current,
            };
            log::trace!("elf {} carries {}", candidate.elf, candidate.calories);
            if self.best.is_none_or(|best| candidate.calories > best.calories) {
                self.best = Some(candidate);
            }
        }
        self.current_elf += 1;
        self.current = 0;
        self.open = false;
    }

    /// Close the last inventory and report the winner.
    #[must_use]
    pub fn finish(mut self) -> Option<Best> {
        self.close();
        self.best
    }
}

/// Find the elf carrying the most calories.
///
/// Returns `Ok(None)` for input with no items at all.
pub fn max_calories<I>(lines: I) -> Result<Option<Best>, InputError>
where
    I: IntoIterator<Item = Result<String, InputError>>,
{
    let mut tally = Tally::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line?;
        let item = line.trim();
        if item.is_empty() {
            tally.close();
            continue;
        }
        let malformed = || InputError::Malformed {
            line: index + 1,
            content: line.clone(),
        };
        let calories = item.parse().map_err(|_| malformed())?;
        tally.add(calories).ok_or_else(malformed)?;
    }
    Ok(tally.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(source: &str) -> impl Iterator<Item = Result<String, InputError>> + '_ {
        source.lines().map(|l| Ok(l.to_string()))
    }

    #[test]
    fn last_group_counts_without_trailing_blank() {
        let best = max_calories(lines("1\n\n2\n3")).expect("in-memory");
        assert_eq!(
            best,
            Some(Best {
                elf: 2,
                calories: 5
            })
        );
    }

    #[test]
    fn ties_keep_first_elf() {
        let best = max_calories(lines("4\n\n1\n3\n\n")).expect("in-memory");
        assert_eq!(best.map(|b| b.elf), Some(1));
    }

    #[test]
    fn every_blank_line_ends_an_elf() {
        // Elves 1, 2, 4 and 5 carry nothing.
        let best = max_calories(lines("\n\n1\n\n\n\n9\n")).expect("in-memory");
        assert_eq!(
            best,
            Some(Best {
                elf: 6,
                calories: 9
            })
        );
    }

    #[test]
    fn total_overflow_is_malformed() {
        let err = max_calories(lines("18446744073709551615\n1\n")).expect_err("overflow");
        match err {
            InputError::Malformed { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "1");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn overflowing_add_leaves_tally_unchanged() {
        let mut tally = Tally::new();
        assert_eq!(tally.add(u64::MAX - 1), Some(u64::MAX - 1));
        assert_eq!(tally.add(2), None);
        assert_eq!(tally.add(1), Some(u64::MAX));
    }

    #[test]
    fn empty_input_has_no_winner() {
        assert_eq!(max_calories(lines("")).expect("in-memory"), None);
    }

    #[test]
    fn non_numeric_item_is_malformed() {
        let err = max_calories(lines("100\nlots\n")).expect_err("malformed");
        match err {
            InputError::Malformed { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "lots");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
