use crate::models::temperature::Tenths;

/// Running min/max/sum/count for one station, in tenths of a degree.
///
/// `sum` is the exact integer sum of every observed tenths value, so the
/// mean can be computed at report time without accumulated rounding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationAggregate {
    pub min: i16,
    pub max: i16,
    pub sum: i64,
    pub count: i64,
}

impl StationAggregate {
    /// Seed an aggregate from its first observation.
    pub fn new(value: Tenths) -> Self {
        Self {
            min: value,
            max: value,
            sum: value as i64,
            count: 1,
        }
    }

    /// Fold one observation in.
    #[inline]
    pub fn update(&mut self, value: Tenths) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value as i64;
        self.count += 1;
    }

    /// Fold another aggregate in. Commutative and associative, so partial
    /// results may be combined in any order.
    pub fn merge(&mut self, other: &StationAggregate) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate_of(values: &[Tenths]) -> StationAggregate {
        let mut agg = StationAggregate::new(values[0]);
        for &v in &values[1..] {
            agg.update(v);
        }
        agg
    }

    #[test]
    fn test_single_observation_identity() {
        let agg = StationAggregate::new(-123);
        assert_eq!(agg.min, -123);
        assert_eq!(agg.max, -123);
        assert_eq!(agg.sum, -123);
        assert_eq!(agg.count, 1);
    }

    #[test]
    fn test_update_tracks_extremes_and_sum() {
        let agg = aggregate_of(&[10, -25, 30]);
        assert_eq!(agg.min, -25);
        assert_eq!(agg.max, 30);
        assert_eq!(agg.sum, 15);
        assert_eq!(agg.count, 3);
    }

    #[test]
    fn test_merge_is_commutative() {
        let a = aggregate_of(&[5, -999, 13]);
        let b = aggregate_of(&[999, 0]);

        let mut ab = a;
        ab.merge(&b);
        let mut ba = b;
        ba.merge(&a);

        assert_eq!(ab, ba);
    }

    #[test]
    fn test_merge_is_associative() {
        let a = aggregate_of(&[1, 2]);
        let b = aggregate_of(&[-7]);
        let c = aggregate_of(&[100, -100, 42]);

        let mut left = a;
        left.merge(&b);
        left.merge(&c);

        let mut bc = b;
        bc.merge(&c);
        let mut right = a;
        right.merge(&bc);

        assert_eq!(left, right);
    }

    #[test]
    fn test_merge_equals_sequential_updates() {
        let values: Vec<Tenths> = vec![13, -42, 0, 999, -999, 7, 7, 7];
        let whole = aggregate_of(&values);

        let mut split = aggregate_of(&values[..3]);
        split.merge(&aggregate_of(&values[3..]));

        assert_eq!(whole, split);
    }
}
