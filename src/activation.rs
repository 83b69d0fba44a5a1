
/// Step function: negative sums map to 0, everything else (zero included) to 1.
#[inline(always)]
pub fn heaviside(x: f64) -> u8 {
    if x < 0. { 0 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heaviside() {
        assert_eq!(0, heaviside(-0.0001));
        assert_eq!(0, heaviside(-100.));
        assert_eq!(1, heaviside(0.));
        assert_eq!(1, heaviside(-0.));
        assert_eq!(1, heaviside(42.));
    }
}
