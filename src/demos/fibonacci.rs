// src/demos/fibonacci.rs
use super::DemoError;

/// `F(0) + F(1) + … + F(n)`, with `F(0) = 0`. Zero for `n == 0`.
pub fn fibonacci_sum(n: u32) -> Result<u128, DemoError> {
    let (mut prev, mut cur) = (0u128, 1u128);
    let mut sum = 0u128;
    for _ in 0..n {
        sum = sum.checked_add(cur).ok_or(DemoError::Overflow(n))?;
        let next = prev.checked_add(cur).ok_or(DemoError::Overflow(n))?;
        prev = cur;
        cur = next;
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_sums() {
        assert_eq!(fibonacci_sum(0).unwrap(), 0);
        assert_eq!(fibonacci_sum(1).unwrap(), 1);
        assert_eq!(fibonacci_sum(2).unwrap(), 2);
        assert_eq!(fibonacci_sum(5).unwrap(), 12);
    }

    #[test]
    fn fifty_terms() {
        assert_eq!(fibonacci_sum(50).unwrap(), 32_951_280_098);
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(fibonacci_sum(400), Err(DemoError::Overflow(400))));
    }
}
