// Copyright (C) 2020-2026 Andy Kurnia.

// Running summary of a stream of scores.
#[derive(Clone, Debug)]
pub struct Stats {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Default for Stats {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Summary {
    pub count: u64,
    pub mean: f64,
    pub standard_deviation: f64,
    pub min: f64,
    pub max: f64,
}

impl Stats {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    // https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm
    #[inline(always)]
    pub fn update(&mut self, new_value: f64) {
        self.count += 1;
        let delta = new_value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = new_value - self.mean;
        self.m2 += delta * delta2;
        self.min = self.min.min(new_value);
        self.max = self.max.max(new_value);
    }

    // https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Parallel_algorithm
    pub fn update_bulk(&mut self, other: &Stats) {
        let original_count = self.count as f64;
        self.count += other.count;
        if self.count != 0 {
            let delta = other.mean - self.mean;
            let delta_mean = delta * (other.count as f64 / self.count as f64);
            self.mean += delta_mean;
            self.m2 += other.m2 + delta * delta_mean * original_count;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    #[inline(always)]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline(always)]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[inline(always)]
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    #[inline(always)]
    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    // NaN when nothing has been seen.
    pub fn min(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.min }
    }

    pub fn max(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.max }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            count: self.count,
            mean: self.mean,
            standard_deviation: self.standard_deviation(),
            min: self.min(),
            max: self.max(),
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} mean={:.2} sd={:.2} min={} max={}",
            self.count,
            self.mean,
            self.standard_deviation(),
            self.min(),
            self.max()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes() {
        let mut stats = Stats::new();
        assert!(stats.min().is_nan());
        for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            stats.update(x);
        }
        assert_eq!(stats.count(), 8);
        assert_eq!(stats.mean(), 5.0);
        assert!((stats.variance() - 32.0 / 7.0).abs() < 1e-9);
        assert_eq!((stats.min(), stats.max()), (2.0, 9.0));
    }

    #[test]
    fn merging_matches_sequential() {
        let values = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let mut all = Stats::new();
        values.iter().for_each(|&x| all.update(x));
        let mut left = Stats::new();
        let mut right = Stats::new();
        values[..3].iter().for_each(|&x| left.update(x));
        values[3..].iter().for_each(|&x| right.update(x));
        left.update_bulk(&right);
        left.update_bulk(&Stats::new());
        assert_eq!(left.count(), all.count());
        assert!((left.mean() - all.mean()).abs() < 1e-9);
        assert!((left.variance() - all.variance()).abs() < 1e-9);
        assert_eq!((left.min(), left.max()), (1.0, 9.0));
    }
}
