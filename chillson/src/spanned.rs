use chumsky::span::SimpleSpan;

/// A value together with the region of the path string it was parsed from. Comparisons only
/// look at `val`, so two segments with the same label are equal wherever they appear.
#[derive(Debug, Clone, Eq)]
pub struct Spanned<T> {
    pub span: SimpleSpan<usize>,
    pub val: T,
}

impl<T: PartialEq> PartialEq for Spanned<T> {
    fn eq(&self, other: &Spanned<T>) -> bool {
        self.val == other.val
    }
}

impl<T: PartialOrd> PartialOrd for Spanned<T> {
    fn partial_cmp(&self, other: &Spanned<T>) -> Option<std::cmp::Ordering> {
        self.val.partial_cmp(&other.val)
    }
}

impl<T: Ord> Ord for Spanned<T> {
    fn cmp(&self, other: &Spanned<T>) -> std::cmp::Ordering {
        self.val.cmp(&other.val)
    }
}
