mod tests {
    use myrtio_ring_selector::{RandomSource, XorShift32};

    #[test]
    fn test_zero_seed_still_produces_values() {
        let mut rng = XorShift32::new(0);
        assert_ne!(rng.next_u32(), 0);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = XorShift32::from_seed64(0x1234_5678_9ABC_DEF0);
        let mut b = XorShift32::from_seed64(0x1234_5678_9ABC_DEF0);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = XorShift32::new(99);
        let mut seen = [false; 48];
        for _ in 0..10_000 {
            let value = rng.below(48);
            assert!(value < 48);
            seen[value] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
        assert_eq!(rng.below(0), 0);
    }
}
