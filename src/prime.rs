/// Result of a primality test. Inputs below 2 are outside the domain and report `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primality {
    Composite,
    Prime,
    Undefined,
}

impl Primality {
    pub fn is_prime(self) -> bool {
        self == Primality::Prime
    }
}

/// Trial division by 2 and then by every odd number up to the integer square root of `x`.
pub fn is_prime(x: usize) -> Primality {
    if x < 2 {
        return Primality::Undefined;
    }
    if x < 4 {
        return Primality::Prime;
    }
    if x % 2 == 0 {
        return Primality::Composite;
    }
    let mut i: usize = 3;
    // i <= x / i avoids overflowing i * i near usize::MAX
    while i <= x / i {
        if x % i == 0 {
            return Primality::Composite;
        }
        i += 2;
    }
    Primality::Prime
}

/// Returns the smallest prime greater than or equal to `x`. Anything below 2 is clamped to 2.
pub fn next_prime(x: usize) -> usize {
    let mut n: usize = x.max(2);
    while !is_prime(n).is_prime() {
        n += 1;
    }
    n
}
