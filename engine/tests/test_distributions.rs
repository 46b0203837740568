//! Statistical and boundary tests for derived distributions
//!
//! All tests use fixed seeds so failures are reproducible.

use prng_engine_core_rs::{CachedGaussian, Pcg32, RandomSource, RngError, ALPHANUMERIC};

#[test]
fn test_range_containment() {
    let mut rng = Pcg32::new(2024, 1);

    for (min, max) in [(0, 9), (-10, 10), (10, 20), (i32::MIN, i32::MAX), (-1, 0)] {
        for _ in 0..100_000 {
            let val = rng.range_i32(min, max);
            assert!(
                val >= min && val <= max,
                "Value {} out of range [{}, {}]",
                val,
                min,
                max
            );
        }
    }
}

#[test]
fn test_range_single_value() {
    let mut rng = Pcg32::new(1, 1);
    for k in [i32::MIN, -5, 0, 5, i32::MAX] {
        assert_eq!(rng.range_i32(k, k), k);
    }
}

#[test]
fn test_range_uniformity_chi_square() {
    let mut rng = Pcg32::new(777, 3);
    let samples = 1_000_000;
    let mut buckets = [0u64; 10];

    for _ in 0..samples {
        buckets[rng.range_i32(0, 9) as usize] += 1;
    }

    let expected = samples as f64 / 10.0;
    for (digit, &count) in buckets.iter().enumerate() {
        let deviation = (count as f64 - expected).abs() / expected;
        assert!(
            deviation < 0.02,
            "Bucket {} has {} samples ({:.3}% off)",
            digit,
            count,
            deviation * 100.0
        );
    }

    // 9 degrees of freedom; 27.88 is the 0.1% critical value
    let chi_square: f64 = buckets
        .iter()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    assert!(chi_square < 27.88, "chi-square {} too large", chi_square);
}

#[test]
fn test_float_bounds() {
    let mut rng = Pcg32::new(31337, 1);

    for _ in 0..1_000_000 {
        let f = rng.next_f32();
        assert!((0.0..1.0).contains(&f), "next_f32() produced {}", f);
        let d = rng.next_f64();
        assert!((0.0..1.0).contains(&d), "next_f64() produced {}", d);
    }
}

#[test]
fn test_range_f32_bounds() {
    let mut rng = Pcg32::new(8, 8);

    for _ in 0..10_000 {
        let symmetric = rng.range_f32(-1.0, 1.0);
        assert!((-1.0..1.0).contains(&symmetric));

        let shifted = rng.range_f32(5.0, 10.0);
        assert!((5.0..=10.0).contains(&shifted));
    }
}

#[test]
fn test_chance_degenerate_probabilities() {
    let mut rng = Pcg32::new(4, 4);

    for _ in 0..1000 {
        assert!(!rng.chance(0.0));
        assert!(!rng.chance(-1.0));
        assert!(rng.chance(1.0));
        assert!(rng.chance(2.0));
    }
}

#[test]
fn test_chance_frequency() {
    let mut rng = Pcg32::new(10, 10);
    let hits = (0..100_000).filter(|_| rng.chance(0.25)).count();
    let rate = hits as f64 / 100_000.0;
    assert!((rate - 0.25).abs() < 0.01, "chance(0.25) hit rate {}", rate);
}

#[test]
fn test_bool_balance() {
    let mut rng = Pcg32::new(11, 11);
    let trues = (0..100_000).filter(|_| rng.next_bool()).count();
    assert!((48_000..52_000).contains(&trues), "{} trues", trues);
}

#[test]
fn test_gaussian_shape() {
    let mut rng = Pcg32::new(12345, 1);
    let n = 100_000;
    let samples: Vec<f64> = (0..n).map(|_| rng.gaussian(0.0, 1.0)).collect();

    let mean: f64 = samples.iter().sum::<f64>() / n as f64;
    let variance: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

    assert!(mean.abs() < 0.05, "Gaussian mean = {}, expected ~0.0", mean);
    assert!(
        (variance.sqrt() - 1.0).abs() < 0.05,
        "Gaussian stddev = {}, expected ~1.0",
        variance.sqrt()
    );
}

#[test]
fn test_gaussian_mean_and_stddev_applied() {
    let mut rng = Pcg32::new(6, 6);
    let n = 50_000;
    let mean = (0..n).map(|_| rng.gaussian(100.0, 15.0)).sum::<f64>() / n as f64;
    assert!((mean - 100.0).abs() < 0.5, "mean {}", mean);
}

#[test]
fn test_cached_gaussian_shape() {
    let mut rng = Pcg32::new(2, 2);
    let mut normal = CachedGaussian::new();
    let n = 100_000;
    let samples: Vec<f64> = (0..n).map(|_| normal.sample(&mut rng, 0.0, 1.0)).collect();

    let mean: f64 = samples.iter().sum::<f64>() / n as f64;
    let variance: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    assert!(mean.abs() < 0.05);
    assert!((variance.sqrt() - 1.0).abs() < 0.05);
}

#[test]
fn test_cached_gaussian_clear() {
    let mut rng = Pcg32::new(2, 2);
    let mut normal = CachedGaussian::new();
    normal.sample(&mut rng, 0.0, 1.0);
    normal.clear();
    assert!(!normal.has_spare());
}

#[test]
fn test_uuid_format() {
    let mut rng = Pcg32::new(123, 456);

    for _ in 0..1000 {
        let id = rng.uuid_string();
        let chars: Vec<char> = id.chars().collect();
        assert_eq!(chars.len(), 36);
        for (i, c) in chars.iter().enumerate() {
            if [8, 13, 18, 23].contains(&i) {
                assert_eq!(*c, '-', "expected hyphen at {} in {}", i, id);
            } else {
                assert!(
                    c.is_ascii_digit() || ('a'..='f').contains(c),
                    "bad hex digit {:?} in {}",
                    c,
                    id
                );
            }
        }
        assert_eq!(chars[14], '4');
        assert!(matches!(chars[19], '8' | '9' | 'a' | 'b'), "variant in {}", id);
    }
}

#[test]
fn test_uuid_v4_version_and_variant() {
    let mut rng = Pcg32::new(1, 2);
    let id = rng.uuid_v4();
    assert_eq!(id.get_version_num(), 4);
    assert_eq!(id.get_variant(), uuid::Variant::RFC4122);
}

#[test]
fn test_write_uuid_matches_uuid_string() {
    let mut a = Pcg32::new(77, 1);
    let mut b = Pcg32::new(77, 1);
    let mut buf = [0u8; 36];
    assert_eq!(a.write_uuid(&mut buf), b.uuid_string());
}

#[test]
fn test_alphanumeric_string() {
    let mut rng = Pcg32::new(3, 3);
    let s = rng.alphanumeric_string(64);
    assert_eq!(s.len(), 64);
    assert!(s.bytes().all(|b| ALPHANUMERIC.contains(&b)));
    assert_eq!(rng.alphanumeric_string(0), "");
}

#[test]
fn test_fill_alphanumeric() {
    let mut rng = Pcg32::new(3, 3);
    let mut buf = [0u8; 10];
    rng.fill_alphanumeric(&mut buf);
    assert!(buf.iter().all(|b| b.is_ascii_alphanumeric()));
}

#[test]
fn test_fill_bytes_lengths_consume_expected_draws() {
    for len in 0..=9 {
        let mut filled = Pcg32::new(50, 1);
        let mut counted = Pcg32::new(50, 1);
        let mut buf = vec![0u8; len];
        filled.fill_bytes(&mut buf);
        for _ in 0..(len + 3) / 4 {
            counted.next_u32();
        }
        assert_eq!(filled, counted, "length {}", len);
    }
}

#[test]
fn test_fill_bytes_matches_words() {
    let mut rng = Pcg32::new(12, 34);
    let mut words = Pcg32::new(12, 34);
    let mut buf = [0u8; 7];
    rng.fill_bytes(&mut buf);

    let first = words.next_u32().to_le_bytes();
    let second = words.next_u32().to_le_bytes();
    assert_eq!(&buf[..4], &first);
    assert_eq!(&buf[4..], &second[..3]);
}

#[test]
fn test_shuffle_is_permutation() {
    let mut rng = Pcg32::new(1, 1);
    let original: Vec<i32> = vec![1, 2, 3, 4, 5];
    let mut v = original.clone();

    rng.shuffle(&mut v);
    assert_eq!(v.len(), 5);
    v.sort();
    assert_eq!(v, original);
}

#[test]
fn test_shuffle_moves_things() {
    let mut rng = Pcg32::new(1, 1);
    let original: Vec<u32> = (0..64).collect();
    let mut v = original.clone();
    rng.shuffle(&mut v);
    assert_ne!(v, original);
}

#[test]
fn test_shuffle_large_elements() {
    let mut rng = Pcg32::new(5, 1);
    let mut blocks: Vec<[u8; 512]> = (0..20u8).map(|i| [i; 512]).collect();
    rng.shuffle(&mut blocks);

    let mut firsts: Vec<u8> = blocks.iter().map(|b| b[0]).collect();
    assert!(blocks.iter().all(|b| b.iter().all(|&x| x == b[0])));
    firsts.sort();
    assert_eq!(firsts, (0..20).collect::<Vec<u8>>());
}

#[test]
fn test_shuffle_positions_uniform() {
    // Each of the 6 orderings of [0, 1, 2] should appear ~1/6 of the time
    let mut rng = Pcg32::new(314, 1);
    let mut counts = std::collections::HashMap::new();
    let trials = 60_000;
    for _ in 0..trials {
        let mut v = [0, 1, 2];
        rng.shuffle(&mut v);
        *counts.entry(v).or_insert(0u32) += 1;
    }
    assert_eq!(counts.len(), 6);
    for (perm, count) in counts {
        let share = count as f64 / trials as f64;
        assert!((share - 1.0 / 6.0).abs() < 0.01, "{:?} share {}", perm, share);
    }
}

#[test]
fn test_choice() {
    let mut rng = Pcg32::new(8, 1);
    let nums = [10, 20, 30, 40];
    for _ in 0..100 {
        let picked = rng.choice(&nums).unwrap();
        assert!(nums.contains(picked));
    }
}

#[test]
fn test_choice_empty() {
    let mut rng = Pcg32::new(8, 1);
    let empty: Vec<String> = Vec::new();
    assert_eq!(rng.choice(&empty), Err(RngError::EmptySequence));
}

#[test]
fn test_index_inclusive_bounds() {
    let mut rng = Pcg32::new(21, 1);
    for max in [0usize, 1, 2, 9, 1000] {
        for _ in 0..1000 {
            assert!(rng.index_inclusive(max) <= max);
        }
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_index_inclusive_wide_span() {
    let mut rng = Pcg32::new(21, 1);
    let max = (1usize << 40) + 3;
    let mut saw_high = false;
    for _ in 0..1000 {
        let idx = rng.index_inclusive(max);
        assert!(idx <= max);
        saw_high |= idx > u32::MAX as usize;
    }
    assert!(saw_high, "wide spans should reach beyond 32 bits");
}
