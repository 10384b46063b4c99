/// Bounded volume level. Mutations saturate at `MIN` and at the ceiling
/// chosen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    level: u8,
    max: u8,
}

impl Volume {
    pub const MIN: u8 = 0;

    pub fn new(max: u8) -> Self {
        Volume {
            level: max / 2,
            max,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn can_increase(&self) -> bool {
        self.level < self.max
    }

    pub fn can_decrease(&self) -> bool {
        self.level > Self::MIN
    }

    pub fn increase(&mut self) {
        if self.can_increase() {
            self.level += 1;
        }
    }

    pub fn decrease(&mut self) {
        if self.can_decrease() {
            self.level -= 1;
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(10)
    }
}
