/// Clamps `n` to `low..=high`.
pub fn cap(n: f32, low: f32, high: f32) -> f32 {
    n.max(low).min(high)
}

/// Like `f32::signum`, except zero counts as negative.
pub fn sign(n: f32) -> f32 {
    if n <= 0.0 {
        -1.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{cap, sign};

    #[test]
    fn test_cap() {
        let cases = [
            (-5.0, 0.0),
            (0.0, 0.0),
            (0.25, 0.25),
            (1.0, 1.0),
            (7.0, 1.0),
        ];
        for &(n, expected) in &cases {
            assert_eq!(cap(n, 0.0, 1.0), expected, "{}", n);
        }
    }

    #[test]
    fn zero_is_negative() {
        assert_eq!(sign(0.0), -1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.1), 1.0);
    }
}
