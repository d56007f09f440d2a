//! Memoized integer sequences over arbitrary-precision integers.
//!
//! Both sequences share the same contract shape: negative indices are
//! rejected, indices 0 and 1 return 1, every computed term is cached
//! forever, and disposal clears the cache and permanently blocks use.
//! Fibonacci memoizes its recursion; Factorial iterates upward from the
//! highest already-cached term instead (no recomputation, no stack growth).

use std::collections::BTreeMap;

use num_bigint::BigUint;

use hh_core::{Disposable, Lifecycle};

use crate::AlgoError;

/// Memoized Fibonacci numbers: F(0) = F(1) = 1, F(n) = F(n-1) + F(n-2).
#[derive(Debug, Default)]
pub struct Fibonacci {
    cache: BTreeMap<u64, BigUint>,
    lifecycle: Lifecycle,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self::default()
    }

    /// The nth Fibonacci number. `NegativeIndex` for `n < 0`.
    pub fn nth(&mut self, n: i64) -> Result<BigUint, AlgoError> {
        self.lifecycle.verify_active()?;
        if n < 0 {
            return Err(AlgoError::NegativeIndex(n));
        }
        Ok(self.nth_inner(n as u64))
    }

    fn nth_inner(&mut self, n: u64) -> BigUint {
        if n < 2 {
            return BigUint::from(1u8);
        }
        if let Some(cached) = self.cache.get(&n) {
            return cached.clone();
        }
        let value = self.nth_inner(n - 1) + self.nth_inner(n - 2);
        self.cache.insert(n, value.clone());
        value
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

impl Disposable for Fibonacci {
    fn dispose(&mut self) {
        if self.lifecycle.dispose() {
            self.cache.clear();
        }
    }

    fn is_disposed(&self) -> bool {
        self.lifecycle.is_disposed()
    }
}

/// Memoized factorials: 0! = 1! = 1, n! = n * (n-1)!.
#[derive(Debug, Default)]
pub struct Factorial {
    cache: BTreeMap<u64, BigUint>,
    lifecycle: Lifecycle,
}

impl Factorial {
    pub fn new() -> Self {
        Self::default()
    }

    /// n!. `NegativeIndex` for `n < 0`.
    pub fn of(&mut self, n: i64) -> Result<BigUint, AlgoError> {
        self.lifecycle.verify_active()?;
        if n < 0 {
            return Err(AlgoError::NegativeIndex(n));
        }
        let n = n as u64;
        if n < 2 {
            return Ok(BigUint::from(1u8));
        }

        // Resume multiplication from the highest cached term at or below n.
        let (mut i, mut acc) = match self.cache.range(..=n).next_back() {
            Some((&k, v)) => (k, v.clone()),
            None => (1, BigUint::from(1u8)),
        };
        while i < n {
            i += 1;
            acc *= BigUint::from(i);
            self.cache.insert(i, acc.clone());
        }
        Ok(acc)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

impl Disposable for Factorial {
    fn dispose(&mut self) {
        if self.lifecycle.dispose() {
            self.cache.clear();
        }
    }

    fn is_disposed(&self) -> bool {
        self.lifecycle.is_disposed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn fibonacci_base_cases_and_small_terms() {
        let mut fib = Fibonacci::new();
        assert_eq!(fib.nth(0).unwrap(), big(1));
        assert_eq!(fib.nth(1).unwrap(), big(1));
        assert_eq!(fib.nth(2).unwrap(), big(2));
        assert_eq!(fib.nth(9).unwrap(), big(55));
    }

    #[test]
    fn fibonacci_rejects_negative_index() {
        let mut fib = Fibonacci::new();
        assert_eq!(fib.nth(-1), Err(AlgoError::NegativeIndex(-1)));
    }

    #[test]
    fn fibonacci_memoizes_overlapping_calls() {
        let mut fib = Fibonacci::new();
        fib.nth(20).unwrap();
        let len = fib.cache_len();
        fib.nth(15).unwrap(); // fully covered by the earlier call
        assert_eq!(fib.cache_len(), len);
    }

    #[test]
    fn fibonacci_grows_past_u64() {
        let mut fib = Fibonacci::new();
        // F(120) with F(0)=F(1)=1 overflows u64; exact value check.
        let value = fib.nth(120).unwrap();
        assert_eq!(value.to_string(), "8670007398507948658051921");
    }

    #[test]
    fn factorial_base_cases_and_small_terms() {
        let mut fact = Factorial::new();
        assert_eq!(fact.of(0).unwrap(), big(1));
        assert_eq!(fact.of(1).unwrap(), big(1));
        assert_eq!(fact.of(5).unwrap(), big(120));
        assert_eq!(fact.of(10).unwrap(), big(3_628_800));
    }

    #[test]
    fn factorial_rejects_negative_index() {
        let mut fact = Factorial::new();
        assert_eq!(fact.of(-1), Err(AlgoError::NegativeIndex(-1)));
    }

    #[test]
    fn factorial_resumes_from_cache() {
        let mut fact = Factorial::new();
        fact.of(10).unwrap();
        let len = fact.cache_len();
        // extending to 12 adds exactly the two new terms
        fact.of(12).unwrap();
        assert_eq!(fact.cache_len(), len + 2);
    }

    #[test]
    fn disposal_is_permanent_for_both_sequences() {
        let mut fib = Fibonacci::new();
        fib.nth(10).unwrap();
        fib.dispose();
        fib.dispose();
        assert!(fib.is_disposed());
        assert_eq!(fib.cache_len(), 0);
        assert_eq!(fib.nth(3), Err(AlgoError::Disposed));

        let mut fact = Factorial::new();
        fact.of(10).unwrap();
        fact.dispose();
        fact.dispose();
        assert!(fact.is_disposed());
        assert_eq!(fact.cache_len(), 0);
        assert_eq!(fact.of(3), Err(AlgoError::Disposed));
    }
}
