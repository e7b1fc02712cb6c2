//! Common mathematical operations for modular arithmetic
//!
//! All binary helpers expect operands already reduced into `[0, m)` and widen
//! to `u128` internally, so no modulus that fits in a `u64` can overflow.

/// Reduce a signed integer into `[0, m)` using true (Euclidean) modulo.
///
/// `reduce(-1, 5) == 4`, unlike the truncating `%` operator.
#[inline]
pub fn reduce(value: i64, m: u64) -> u64 {
    (value as i128).rem_euclid(m as i128) as u64
}

/// Perform modular addition: (a + b) mod m
#[inline]
pub fn mod_add(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

/// Perform modular subtraction: (a - b) mod m
#[inline]
pub fn mod_sub(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + m as u128 - (b as u128 % m as u128)) % m as u128) as u64
}

/// Perform modular negation: (-a) mod m
#[inline]
pub fn mod_neg(a: u64, m: u64) -> u64 {
    mod_sub(0, a, m)
}

/// Perform modular multiplication: (a * b) mod m
#[inline]
pub fn mod_mul(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Perform modular exponentiation (a^b mod m)
///
/// Implements the square-and-multiply algorithm.
pub fn mod_exp(a: u64, b: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }

    let mut result = 1u64;
    let mut base = a % m;
    let mut exp = b;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, base, m);
        }

        exp >>= 1;
        base = mod_mul(base, base, m);
    }

    result
}

/// Compute the greatest common divisor of two numbers
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a*x + b*y == g == gcd(a, b)`.
pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i128, 0i128);
    let (mut old_t, mut t) = (0i128, 1i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }

    if old_r < 0 {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Compute a^(-1) mod m with the extended Euclidean algorithm
///
/// Returns `None` when `gcd(a, m) != 1`, which includes `a ≡ 0` and `m <= 1`.
/// Works for composite moduli whenever an inverse exists.
pub fn mod_inv(a: u64, m: u64) -> Option<u64> {
    if m <= 1 {
        return None;
    }

    let a = a % m;
    if a == 0 {
        return None;
    }

    let (g, x, _) = extended_gcd(a as i128, m as i128);
    if g != 1 {
        return None;
    }

    Some(x.rem_euclid(m as i128) as u64)
}

/// Deterministic primality test by trial division over `6k ± 1`
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut d = 5u64;
    while (d as u128) * (d as u128) <= n as u128 {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}
