//! Diceware rolls: each roll is five six-sided dice, read as a five-digit
//! index into a diceware word list.

use getrandom::getrandom;
use thiserror::Error;

/// Dice per roll, one word-list index.
pub const DICE_PER_ROLL: usize = 5;

#[derive(Debug, Error)]
pub enum DicewareError {
    #[error("entropy source failed: {0}")]
    Entropy(#[from] getrandom::Error),
}

/// Produce `count` rolls such as `"36154"`.
pub fn roll(count: usize) -> Result<Vec<String>, DicewareError> {
    (0..count)
        .map(|_| {
            let mut digits = String::with_capacity(DICE_PER_ROLL);
            for _ in 0..DICE_PER_ROLL {
                digits.push(char::from(b'0' + die()?));
            }
            Ok(digits)
        })
        .collect()
}

/// Number the rolls for display: `1: 36154`.
pub fn render(rolls: &[String]) -> String {
    rolls
        .iter()
        .enumerate()
        .map(|(i, roll)| format!("{}: {roll}\n", i + 1))
        .collect()
}

/// One fair die in `1..=6`.
fn die() -> Result<u8, DicewareError> {
    // 252 is the largest multiple of 6 that fits in a byte; higher bytes would bias low faces
    loop {
        let mut byte = [0u8; 1];
        getrandom(&mut byte)?;
        if byte[0] < 252 {
            return Ok(byte[0] % 6 + 1);
        }
    }
}
