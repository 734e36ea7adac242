use std::fs;
use std::path::Path;

use crate::error::{BracketError, Result};

// ------------- Fuel -------------
/// Floor division, so negative masses round down like the positive ones do.
pub fn fuel_for(mass: i64) -> i64 {
    mass.div_euclid(3) - 2
}

fn checked_total(fuels: impl IntoIterator<Item = i64>) -> Result<i64> {
    fuels.into_iter().try_fold(0_i64, |total, fuel| {
        total
            .checked_add(fuel)
            .ok_or_else(|| BracketError::Overflow("fuel total does not fit in an i64".into()))
    })
}

pub fn solve1(masses: &[i64]) -> Result<i64> {
    checked_total(masses.iter().map(|&mass| fuel_for(mass)))
}

/// Fuel needs fuel too: keeps adding fuel for the fuel until it drops to zero.
pub fn solve2(masses: &[i64]) -> Result<i64> {
    let per_module = masses
        .iter()
        .map(|&mass| {
            checked_total(
                std::iter::successors(Some(fuel_for(mass)), |&fuel| Some(fuel_for(fuel)))
                    .take_while(|&fuel| fuel > 0),
            )
        })
        .collect::<Result<Vec<_>>>()?;
    checked_total(per_module)
}

pub fn parse_masses(path: impl AsRef<Path>) -> Result<Vec<i64>> {
    let text = fs::read_to_string(path)?;
    parse_mass_list(&text)
}

pub fn parse_mass_list(text: &str) -> Result<Vec<i64>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            line.trim().parse::<i64>().map_err(|e| BracketError::Parse {
                message: format!("'{}' is not a mass: {e}", line.trim()),
                line: Some(n + 1),
            })
        })
        .collect()
}

// ------------- Fibonacci -------------
pub fn fibonacci(m: u32) -> u64 {
    if m <= 1 {
        return 1;
    }
    fibonacci(m - 1) + fibonacci(m - 2)
}

// ------------- Simulation -------------
/// The first realisation is always ignored, on top of whatever `ignore` lists.
/// Nothing is remembered between calls.
pub fn run_simulation(realisations: &[i64], ignore: &[i64]) -> i64 {
    let ignored: i64 = ignore.iter().sum::<i64>() + 1;
    realisations.iter().sum::<i64>() - ignored
}
