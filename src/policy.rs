/// Which way sequence lines are rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `T` -> `U`, `t` -> `u`.
    DnaToRna,
    /// `U` -> `T`, `u` -> `t`.
    RnaToDna,
}

impl Direction {
    /// `--rna` selects DNA -> RNA; without it the conversion goes RNA -> DNA.
    pub fn from_rna_flag(rna: bool) -> Self {
        if rna { Self::DnaToRna } else { Self::RnaToDna }
    }

    pub const fn inverse(self) -> Self {
        match self {
            Self::DnaToRna => Self::RnaToDna,
            Self::RnaToDna => Self::DnaToRna,
        }
    }

    /// Uppercase base that gets replaced.
    pub const fn source_base(self) -> u8 {
        match self {
            Self::DnaToRna => b'T',
            Self::RnaToDna => b'U',
        }
    }

    /// Uppercase base written in its place.
    pub const fn target_base(self) -> u8 {
        self.inverse().source_base()
    }
}

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub direction: Direction,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            direction: Direction::RnaToDna, // same as running without --rna
        }
    }
}
