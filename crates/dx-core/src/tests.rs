//! Unit tests for dx-core primitives.

#[cfg(test)]
mod ids {
    use crate::UnitId;

    #[test]
    fn index_roundtrip() {
        let id = UnitId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(UnitId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(UnitId(0) < UnitId(1));
        assert!(UnitId(100) > UnitId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(UnitId::INVALID.0, u32::MAX);
        assert_eq!(UnitId::default(), UnitId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(UnitId(7).to_string(), "UnitId(7)");
    }
}

#[cfg(test)]
mod seq {
    use crate::Seq;

    #[test]
    fn seq_arithmetic() {
        let s = Seq(10);
        assert_eq!(s + 5, Seq(15));
        assert_eq!(s.offset(3), Seq(13));
        assert_eq!(Seq(15) - Seq(10), 5u64);
        assert_eq!(Seq(15).since(Seq(10)), 5);
    }

    #[test]
    fn bump_returns_pre_increment_value() {
        let mut s = Seq::ZERO;
        assert_eq!(s.bump(), Seq(0));
        assert_eq!(s.bump(), Seq(1));
        assert_eq!(s, Seq(2));
    }

    #[test]
    fn display() {
        assert_eq!(Seq(9).to_string(), "D9");
    }
}

#[cfg(test)]
mod rng {
    use crate::{UnitId, UnitRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = UnitRng::new(12345, UnitId(0));
        let mut r2 = UnitRng::new(12345, UnitId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_units_differ() {
        let mut r0 = UnitRng::new(1, UnitId(0));
        let mut r1 = UnitRng::new(1, UnitId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent units should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = UnitRng::new(0, UnitId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = UnitRng::new(0, UnitId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = UnitRng::new(0, UnitId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7u8]), Some(&7));
    }
}

#[cfg(test)]
mod error {
    use crate::{DxError, UnitId};

    #[test]
    fn unknown_unit_message_names_the_unit() {
        let e = DxError::UnknownUnit(UnitId(3));
        assert_eq!(e.to_string(), "unit UnitId(3) is not registered");
    }
}
