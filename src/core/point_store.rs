/// Spendable points plus the lifetime counter for the current prestige epoch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStore {
    pub points: f64,
    pub total_accumulated: f64,
}

impl PointStore {
    /// Adds earned points to both counters. Non-finite or non-positive amounts are dropped.
    pub fn earn(&mut self, amount: f64) -> f64 {
        if !amount.is_finite() || amount <= 0.0 {
            return 0.0;
        }
        self.points += amount;
        self.total_accumulated += amount;
        amount
    }

    pub fn can_afford(&self, cost: f64) -> bool {
        self.points >= cost
    }

    /// Deducts `cost` if affordable. `total_accumulated` is never touched.
    pub fn spend(&mut self, cost: f64) -> bool {
        if !cost.is_finite() || cost < 0.0 || !self.can_afford(cost) {
            return false;
        }
        self.points -= cost;
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
