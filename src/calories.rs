use itertools::Itertools;

/// Sums each blank-line-separated group of numbers. The last group counts
/// whether or not the input ends with a blank line.
pub fn group_totals(input: &str) -> crate::Result<Vec<u64>> {
    let mut totals = Vec::new();
    let mut current: Option<u64> = None;

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() {
            if let Some(total) = current.take() {
                totals.push(total);
            }
            continue;
        }

        let value: u64 = match line.parse() {
            Ok(value) => value,
            Err(_) => anyhow::bail!("line {}: not a number: {:?}", index + 1, line),
        };
        current = match current.unwrap_or(0).checked_add(value) {
            Some(total) => Some(total),
            None => anyhow::bail!("line {}: group total overflows", index + 1),
        };
    }

    if let Some(total) = current {
        totals.push(total);
    }

    log::debug!("{} groups: {:?}", totals.len(), totals);

    Ok(totals)
}

/// The `n` largest totals, largest first.
pub fn top_totals(totals: &[u64], n: usize) -> Vec<u64> {
    totals
        .iter()
        .copied()
        .sorted_by(|a, b| b.cmp(a))
        .take(n)
        .collect()
}

pub fn highest_total(totals: &[u64]) -> crate::Result<u64> {
    match totals.iter().max() {
        Some(&x) => Ok(x),
        None => anyhow::bail!("no groups in input"),
    }
}

pub fn sum_of_top_three(totals: &[u64]) -> crate::Result<u64> {
    if totals.len() < 3 {
        anyhow::bail!("need at least three groups, got {}", totals.len());
    }

    Ok(top_totals(totals, 3).iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "1000
2000
3000

4000

5000
6000

7000
8000
9000

10000
";

    #[test]
    fn example_groups() {
        let totals = group_totals(EXAMPLE).unwrap();
        assert_eq!(totals, vec![6000, 4000, 11000, 24000, 10000]);
        assert_eq!(highest_total(&totals).unwrap(), 24000);
        assert_eq!(sum_of_top_three(&totals).unwrap(), 45000);
    }

    #[test]
    fn last_group_without_trailing_newline() {
        let totals = group_totals("1\n2\n\n3").unwrap();
        assert_eq!(totals, vec![3, 3]);
    }

    #[test]
    fn repeated_blank_lines_do_not_make_empty_groups() {
        let totals = group_totals("\n5\n\n\n\n7\n\n").unwrap();
        assert_eq!(totals, vec![5, 7]);
    }

    #[test]
    fn top_totals_are_descending() {
        assert_eq!(top_totals(&[3, 9, 1, 7], 3), vec![9, 7, 3]);
        assert_eq!(top_totals(&[3], 3), vec![3]);
    }

    #[test]
    fn needs_three_groups() {
        assert!(sum_of_top_three(&[1, 2]).is_err());
        assert!(highest_total(&[]).is_err());
    }

    #[test]
    fn group_total_overflow_is_an_error() {
        let err = group_totals("18446744073709551615\n1\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn bad_number() {
        let err = group_totals("100\nabc\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
