/// Role of a line inside the repeating 4-line FASTQ record.
///
/// Classification is purely positional: a header that does not start with
/// `@` is still a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Sequence,
    Separator,
    Quality,
}

impl LineKind {
    #[inline]
    pub const fn from_position(position: u64) -> Self {
        match position % 4 {
            0 => Self::Header,
            1 => Self::Sequence,
            2 => Self::Separator,
            _ => Self::Quality,
        }
    }
    #[inline]
    pub fn is_sequence(self) -> bool {
        self == Self::Sequence
    }
}
