/// Running sum of √i for i in 0..n, one scalar at a time.
pub fn sqrt_sum(n: u64) -> f64 {
    let mut total = 0.0;
    for i in 0..n {
        total += (i as f64).sqrt();
    }
    total
}
