use nearpair_core::Point;

/// Deterministic xorshift generator shared by benches and tests.
#[derive(Clone)]
pub struct XorShift64 {
    state: u64,
}

#[allow(dead_code)]
impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    pub fn gen_f64(&mut self, min: f64, max: f64) -> f64 {
        let n = self.next_u64() as f64 / u64::MAX as f64;
        min + (max - min) * n
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    pub fn gen_point(&mut self, min: f64, max: f64) -> Point {
        Point::new(self.gen_f64(min, max), self.gen_f64(min, max))
    }

    pub fn gen_points(&mut self, n: usize, min: f64, max: f64) -> Vec<Point> {
        (0..n).map(|_| self.gen_point(min, max)).collect()
    }

    /// Points on the integer grid `[0, side)^2`, so distance ties are common.
    pub fn gen_grid_points(&mut self, n: usize, side: u64) -> Vec<Point> {
        (0..n)
            .map(|_| {
                Point::new(
                    (self.next_u64() % side) as f64,
                    (self.next_u64() % side) as f64,
                )
            })
            .collect()
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for k in (1..items.len()).rev() {
            let swap = self.gen_index(k + 1);
            items.swap(k, swap);
        }
    }
}
