use crate::policy::Direction;

/// Byte-for-byte substitution applied to sequence lines.
///
/// Only the two cases of one base are remapped; every other byte, including
/// non-ASCII bytes of UTF-8 text, maps to itself.
#[derive(Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    map: [u8; 256],
    direction: Direction,
}

pub static DNA_TO_RNA: SubstitutionTable = SubstitutionTable::build(Direction::DnaToRna);
pub static RNA_TO_DNA: SubstitutionTable = SubstitutionTable::build(Direction::RnaToDna);

impl SubstitutionTable {
    const fn build(direction: Direction) -> Self {
        let mut map = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            map[i] = i as u8;
            i += 1;
        }
        let from = direction.source_base();
        let to = direction.target_base();
        map[from as usize] = to;
        map[from.to_ascii_lowercase() as usize] = to.to_ascii_lowercase();
        Self { map, direction }
    }

    pub fn for_direction(direction: Direction) -> &'static Self {
        match direction {
            Direction::DnaToRna => &DNA_TO_RNA,
            Direction::RnaToDna => &RNA_TO_DNA,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn map(&self, b: u8) -> u8 {
        self.map[b as usize]
    }

    /// Rewrite `seq` in place; returns how many bytes changed.
    pub fn apply(&self, seq: &mut [u8]) -> usize {
        let mut changed = 0;
        for b in seq.iter_mut() {
            let m = self.map[*b as usize];
            changed += usize::from(m != *b);
            *b = m;
        }
        changed
    }
}

impl std::fmt::Debug for SubstitutionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let from = self.direction.source_base();
        let to = self.direction.target_base();
        write!(
            f,
            "SubstitutionTable({}->{}, {}->{})",
            from as char,
            to as char,
            from.to_ascii_lowercase() as char,
            to.to_ascii_lowercase() as char
        )
    }
}
