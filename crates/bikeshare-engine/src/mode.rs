/// A fixed, ordered set of display modes for one view.
pub trait ViewMode: Copy + Eq + 'static {
    /// Every mode in cycling order.
    const ALL: &'static [Self];

    fn name(self) -> &'static str;
}

/// Index into `M::ALL`, advanced with wrap-around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeCycle<M: ViewMode> {
    index: usize,
    _mode: std::marker::PhantomData<M>,
}

impl<M: ViewMode> ModeCycle<M> {
    pub fn new() -> Self {
        Self {
            index: 0,
            _mode: std::marker::PhantomData,
        }
    }

    pub fn current(&self) -> M {
        M::ALL[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % M::ALL.len();
    }
}

impl<M: ViewMode> Default for ModeCycle<M> {
    fn default() -> Self {
        Self::new()
    }
}
