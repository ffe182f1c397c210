//! Fixed partition of the number space into five contiguous zones.

use data_loader::Number;
use std::ops::RangeInclusive;

/// A contiguous band of numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    /// 1-based zone index
    pub id: u8,
    pub first: Number,
    pub last: Number,
}

impl Zone {
    pub const fn new(id: u8, first: Number, last: Number) -> Self {
        Self { id, first, last }
    }

    /// Members in ascending order
    pub fn members(&self) -> RangeInclusive<Number> {
        self.first..=self.last
    }

    pub fn contains(&self, number: Number) -> bool {
        self.members().contains(&number)
    }
}

/// The zone table. The last zone is one number short.
pub const ZONES: [Zone; 5] = [
    Zone::new(1, 1, 8),
    Zone::new(2, 9, 16),
    Zone::new(3, 17, 24),
    Zone::new(4, 25, 32),
    Zone::new(5, 33, 39),
];

/// The zone a number belongs to
pub fn zone_of(number: Number) -> Option<&'static Zone> {
    ZONES.iter().find(|z| z.contains(number))
}
