use rand::Rng;
use std::time::Instant;

#[test]
fn test_sort_1m_i64() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let data: Vec<i64> = (0..count).map(|_| rng.random()).collect();

    let mut expected = data.clone();
    expected.sort_unstable();

    let mut sorted = data;
    println!("Sorting {} elements...", count);
    let start = Instant::now();
    stratasort::sort(&mut sorted);
    println!("Sorted 1M i64 in {:?}", start.elapsed());

    assert_eq!(sorted, expected);
}

#[test]
fn test_sort_1m_f64() {
    let count = 1_000_000;
    let mut rng = rand::rng();
    let mut data: Vec<f64> = (0..count).map(|_| rng.random_range(-1e12..1e12)).collect();

    let start = Instant::now();
    stratasort::sort(&mut data);
    println!("Sorted 1M f64 in {:?}", start.elapsed());

    for i in 0..count - 1 {
        assert!(data[i] <= data[i + 1], "order violated at index {}", i);
    }
}

#[test]
fn test_sort_1m_dense_u32() {
    let count = 1_000_000;
    let mut rng = rand::rng();
    let mut data: Vec<u32> = (0..count).map(|_| rng.random_range(0..1000)).collect();

    let start = Instant::now();
    stratasort::sort(&mut data);
    println!("Sorted 1M dense u32 in {:?}", start.elapsed());

    for i in 0..count - 1 {
        assert!(data[i] <= data[i + 1], "order violated at index {}", i);
    }
}

#[test]
fn test_reused_scratch_many_rounds() {
    // One scratch allocation across many sorts, the hot-path usage the
    // caller-buffer entry exists for.
    let mut rng = rand::rng();
    let mut scratch = vec![0u64; 10_000];

    for round in 0..100 {
        let n = rng.random_range(2..=10_000);
        let mut data: Vec<u64> = (0..n).map(|_| rng.random()).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        stratasort::sort_with(&mut data, &mut scratch);
        assert_eq!(data, expected, "mismatch in round {}", round);
    }
}

#[test]
#[ignore]
fn test_sort_100m_u64() {
    // ~800MB of keys plus the same again in scratch; run explicitly with
    // `cargo test --release -- --ignored`.
    let count = 100_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut data: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    stratasort::sort(&mut data);
    println!("Sorted 100M u64 in {:?}", start.elapsed());

    for i in (0..count - 1).step_by(1000) {
        assert!(data[i] <= data[i + 1], "order violated at index {}", i);
    }
}
