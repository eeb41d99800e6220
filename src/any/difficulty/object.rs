pub trait IDifficultyObject: Sized {
    fn idx(&self) -> usize;

    fn previous<'a>(&self, backwards_idx: usize, diff_objects: &'a [Self]) -> Option<&'a Self> {
        self.idx()
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| diff_objects.get(idx))
    }
}

pub trait HasStartTime {
    fn start_time(&self) -> f64;
}
