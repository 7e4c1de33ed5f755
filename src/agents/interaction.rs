use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Multi-select prompt over the offered update lines
///
/// This component owns all terminal interaction for picking updates,
/// keeping prompt handling out of the pipeline logic. It returns the
/// chosen lines as the exact strings that were offered.
pub struct SelectionPrompt;

impl SelectionPrompt {
    pub fn new() -> Self {
        Self
    }

    /// Present the numbered list and read a selection from stdin.
    ///
    /// Accepted input: space/comma separated numbers (`1 3 5`), ranges
    /// (`2-4`), `a`/`all` for everything, or `q`/empty for nothing.
    /// Unparseable input re-prompts; end of input selects nothing.
    pub fn choose(&self, options: &[String]) -> Result<Vec<String>> {
        println!(
            "\n{}",
            "Select the modules you want to update".cyan().bold()
        );
        for (idx, option) in options.iter().enumerate() {
            println!("  {:>3}. {}", idx + 1, option);
        }

        loop {
            print!(
                "{}",
                "Modules to update [e.g. 1 3 5, 2-4, a(ll), q(none)]: ".bold()
            );
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                // EOF, treat like an empty selection
                println!();
                return Ok(Vec::new());
            }

            match parse_selection(input.trim(), options.len()) {
                Ok(indices) => {
                    return Ok(indices
                        .into_iter()
                        .map(|idx| options[idx].clone())
                        .collect());
                }
                Err(message) => println!("{}", message.red()),
            }
        }
    }
}

impl Default for SelectionPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one input line into ascending zero-based indices.
fn parse_selection(input: &str, len: usize) -> std::result::Result<Vec<usize>, String> {
    let input = input.to_lowercase();
    match input.as_str() {
        "" | "q" | "quit" | "none" => return Ok(Vec::new()),
        "a" | "all" => return Ok((0..len).collect()),
        _ => {}
    }

    let mut picked = vec![false; len];
    for token in input
        .split([' ', ','])
        .filter(|token| !token.is_empty())
    {
        let (lo, hi) = match token.split_once('-') {
            Some((lo, hi)) => (parse_index(lo, len)?, parse_index(hi, len)?),
            None => {
                let idx = parse_index(token, len)?;
                (idx, idx)
            }
        };
        if lo > hi {
            return Err(format!("Range '{}' is reversed.", token));
        }
        for slot in &mut picked[lo..=hi] {
            *slot = true;
        }
    }

    Ok(picked
        .iter()
        .enumerate()
        .filter_map(|(idx, &p)| p.then_some(idx))
        .collect())
}

fn parse_index(token: &str, len: usize) -> std::result::Result<usize, String> {
    let number: usize = token.parse().map_err(|_| {
        format!(
            "Could not read '{}'. Use numbers between 1 and {}, ranges like 2-4, or a(ll).",
            token, len
        )
    })?;
    if number == 0 || number > len {
        return Err(format!(
            "'{}' is out of range. Pick numbers between 1 and {}.",
            token, len
        ));
    }
    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_ranges() {
        assert_eq!(parse_selection("1 3", 5).unwrap(), vec![0, 2]);
        assert_eq!(parse_selection("2-4", 5).unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_selection("1, 3-4", 5).unwrap(), vec![0, 2, 3]);
    }

    #[test]
    fn deduplicates_and_orders_by_list_position() {
        assert_eq!(parse_selection("3 1 3", 5).unwrap(), vec![0, 2]);
        assert_eq!(parse_selection("2-3 3", 5).unwrap(), vec![1, 2]);
    }

    #[test]
    fn all_and_none_shortcuts() {
        assert_eq!(parse_selection("a", 3).unwrap(), vec![0, 1, 2]);
        assert_eq!(parse_selection("ALL", 3).unwrap(), vec![0, 1, 2]);
        assert!(parse_selection("", 3).unwrap().is_empty());
        assert!(parse_selection("q", 3).unwrap().is_empty());
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!(parse_selection("0", 3).is_err());
        assert!(parse_selection("4", 3).is_err());
        assert!(parse_selection("x", 3).is_err());
        assert!(parse_selection("3-1", 3).is_err());
    }
}
