use fastq_rnadna::{Direction, LineKind, SubstitutionTable};

#[test]
fn tables_only_touch_their_base() {
    let d2r = SubstitutionTable::for_direction(Direction::DnaToRna);
    let r2d = SubstitutionTable::for_direction(Direction::RnaToDna);
    assert_eq!(d2r.direction(), Direction::DnaToRna);
    assert_eq!(r2d.direction(), Direction::RnaToDna);

    for b in 0..=u8::MAX {
        let expected_d2r = match b {
            b'T' => b'U',
            b't' => b'u',
            _ => b,
        };
        let expected_r2d = match b {
            b'U' => b'T',
            b'u' => b't',
            _ => b,
        };
        assert_eq!(d2r.map(b), expected_d2r, "DNA->RNA byte {b:#04x}");
        assert_eq!(r2d.map(b), expected_r2d, "RNA->DNA byte {b:#04x}");
    }
}

#[test]
fn apply_reports_changed_bytes() {
    let mut seq = b"TtUuAN".to_vec();
    let n = SubstitutionTable::for_direction(Direction::DnaToRna).apply(&mut seq);
    assert_eq!(n, 2);
    assert_eq!(seq, b"UuUuAN");
    assert_eq!(seq.len(), 6);
}

#[test]
fn direction_from_flag() {
    assert_eq!(Direction::from_rna_flag(true), Direction::DnaToRna);
    assert_eq!(Direction::from_rna_flag(false), Direction::RnaToDna);
    assert_eq!(Direction::DnaToRna.inverse(), Direction::RnaToDna);
    assert_eq!(Direction::DnaToRna.target_base(), b'U');
    assert_eq!(Direction::RnaToDna.target_base(), b'T');
}

#[test]
fn line_kind_cycles_every_four_lines() {
    let kinds: Vec<LineKind> = (0..8).map(LineKind::from_position).collect();
    assert_eq!(
        kinds,
        [
            LineKind::Header,
            LineKind::Sequence,
            LineKind::Separator,
            LineKind::Quality,
            LineKind::Header,
            LineKind::Sequence,
            LineKind::Separator,
            LineKind::Quality,
        ]
    );
    assert!(LineKind::from_position(5).is_sequence());
    assert!(!LineKind::from_position(4).is_sequence());
}
