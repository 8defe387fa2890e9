use super::types::{Inputs, Mode};

pub fn classify(inputs: &Inputs) -> Mode {
    let count = [
        inputs.cagr.is_some(),
        inputs.multiplier.is_some(),
        inputs.years.is_some(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    match count {
        0 => Mode::Zero,
        1 => Mode::One,
        2 => Mode::Two,
        _ => Mode::Three,
    }
}
