//! Static tables for the 2-D VLC run/level engine and the dequantizer
//! (spec.md §4.4-§4.5). Transcribed verbatim from the reference decoder's
//! `intra_dec`/`inter_dec`/`chroma_dec`/`cbp_tab`/`dequant_*` tables,
//! including its table-3 typo (`-1 -1 -1` meant as two entries, kept below
//! as written in the source).

/// One entry of a 2-D run/level VLC table: `(level, run, table_inc)`.
/// `table_inc` selects which of a family's tables decodes the *next*
/// coefficient; `(0, 0, 0)` marks end-of-block.
pub type RunLevelEntry = (i32, i32, i32);

/// A single escalation step of a 2-D VLC run/level table family.
pub struct Dec2dVlc {
    pub rltab: &'static [RunLevelEntry],
    pub level_add: &'static [i32],
    pub golomb_order: u32,
    pub inc_limit: i32,
    pub max_run: i32,
}

const EOB: RunLevelEntry = (0, 0, 0);

pub static INTRA_DEC: [Dec2dVlc; 7] = [
    Dec2dVlc {
        rltab: &[
            (1, 1, 1), (-1, 1, 1), (1, 2, 1), (-1, 2, 1), (1, 3, 1), (-1, 3, 1),
            (1, 4, 1), (-1, 4, 1), (1, 5, 1), (-1, 5, 1), (1, 6, 1), (-1, 6, 1),
            (1, 7, 1), (-1, 7, 1), (1, 8, 1), (-1, 8, 1), (1, 9, 1), (-1, 9, 1),
            (1, 10, 1), (-1, 10, 1), (1, 11, 1), (-1, 11, 1), (2, 1, 2), (-2, 1, 2),
            (1, 12, 1), (-1, 12, 1), (1, 13, 1), (-1, 13, 1), (1, 14, 1), (-1, 14, 1),
            (1, 15, 1), (-1, 15, 1), (2, 2, 2), (-2, 2, 2), (1, 16, 1), (-1, 16, 1),
            (1, 17, 1), (-1, 17, 1), (3, 1, 3), (-3, 1, 3), (1, 18, 1), (-1, 18, 1),
            (1, 19, 1), (-1, 19, 1), (2, 3, 2), (-2, 3, 2), (1, 20, 1), (-1, 20, 1),
            (1, 21, 1), (-1, 21, 1), (2, 4, 2), (-2, 4, 2), (1, 22, 1), (-1, 22, 1),
            (2, 5, 2), (-2, 5, 2), (1, 23, 1), (-1, 23, 1), EOB,
        ],
        level_add: &[0, 4, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, -1, -1, -1],
        golomb_order: 2,
        inc_limit: 0,
        max_run: 23,
    },
    Dec2dVlc {
        rltab: &[
            (1, 1, 0), (-1, 1, 0), (1, 2, 0), (-1, 2, 0), (2, 1, 1), (-2, 1, 1),
            (1, 3, 0), (-1, 3, 0), EOB, (1, 4, 0), (-1, 4, 0), (1, 5, 0),
            (-1, 5, 0), (1, 6, 0), (-1, 6, 0), (3, 1, 2), (-3, 1, 2), (2, 2, 1),
            (-2, 2, 1), (1, 7, 0), (-1, 7, 0), (1, 8, 0), (-1, 8, 0), (1, 9, 0),
            (-1, 9, 0), (2, 3, 1), (-2, 3, 1), (4, 1, 2), (-4, 1, 2), (1, 10, 0),
            (-1, 10, 0), (1, 11, 0), (-1, 11, 0), (2, 4, 1), (-2, 4, 1), (3, 2, 2),
            (-3, 2, 2), (1, 12, 0), (-1, 12, 0), (2, 5, 1), (-2, 5, 1), (5, 1, 3),
            (-5, 1, 3), (1, 13, 0), (-1, 13, 0), (2, 6, 1), (-2, 6, 1), (1, 14, 0),
            (-1, 14, 0), (2, 7, 1), (-2, 7, 1), (2, 8, 1), (-2, 8, 1), (3, 3, 2),
            (-3, 3, 2), (6, 1, 3), (-6, 1, 3), (1, 15, 0), (-1, 15, 0),
        ],
        level_add: &[0, 7, 4, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 2,
        inc_limit: 1,
        max_run: 15,
    },
    Dec2dVlc {
        rltab: &[
            (1, 1, 0), (-1, 1, 0), (2, 1, 0), (-2, 1, 0), (1, 2, 0), (-1, 2, 0),
            (3, 1, 1), (-3, 1, 1), EOB, (1, 3, 0), (-1, 3, 0), (2, 2, 0),
            (-2, 2, 0), (4, 1, 1), (-4, 1, 1), (1, 4, 0), (-1, 4, 0), (5, 1, 2),
            (-5, 1, 2), (1, 5, 0), (-1, 5, 0), (3, 2, 1), (-3, 2, 1), (2, 3, 0),
            (-2, 3, 0), (1, 6, 0), (-1, 6, 0), (6, 1, 2), (-6, 1, 2), (2, 4, 0),
            (-2, 4, 0), (1, 7, 0), (-1, 7, 0), (4, 2, 1), (-4, 2, 1), (7, 1, 2),
            (-7, 1, 2), (3, 3, 1), (-3, 3, 1), (2, 5, 0), (-2, 5, 0), (1, 8, 0),
            (-1, 8, 0), (2, 6, 0), (-2, 6, 0), (8, 1, 3), (-8, 1, 3), (1, 9, 0),
            (-1, 9, 0), (5, 2, 2), (-5, 2, 2), (3, 4, 1), (-3, 4, 1), (2, 7, 0),
            (-2, 7, 0), (9, 1, 3), (-9, 1, 3), (1, 10, 0), (-1, 10, 0),
        ],
        level_add: &[0, 10, 6, 4, 4, 3, 3, 3, 2, 2, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 2,
        inc_limit: 2,
        max_run: 10,
    },
    Dec2dVlc {
        rltab: &[
            (1, 1, 0), (-1, 1, 0), (2, 1, 0), (-2, 1, 0), (3, 1, 0), (-3, 1, 0),
            (1, 2, 0), (-1, 2, 0), EOB, (4, 1, 0), (-4, 1, 0), (5, 1, 1),
            (-5, 1, 1), (2, 2, 0), (-2, 2, 0), (1, 3, 0), (-1, 3, 0), (6, 1, 1),
            (-6, 1, 1), (3, 2, 0), (-3, 2, 0), (7, 1, 1), (-7, 1, 1), (1, 4, 0),
            (-1, 4, 0), (8, 1, 2), (-8, 1, 2), (2, 3, 0), (-2, 3, 0), (4, 2, 0),
            (-4, 2, 0), (1, 5, 0), (-1, 5, 0), (9, 1, 2), (-9, 1, 2), (5, 2, 1),
            (-5, 2, 1), (2, 4, 0), (-2, 4, 0), (10, 1, 2), (-10, 1, 2), (3, 3, 0),
            (-3, 3, 0), (1, 6, 0), (-1, 6, 0), (11, 1, 3), (-11, 1, 3), (6, 2, 1),
            (-6, 2, 1), (1, 7, 0), (-1, 7, 0), (2, 5, 0), (-2, 5, 0), (3, 4, 0),
            (-3, 4, 0), (12, 1, 3), (-12, 1, 3), (4, 3, 0), (-4, 3, 0),
        ],
        level_add: &[0, 13, 7, 5, 4, 3, 2, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 2,
        inc_limit: 4,
        max_run: 7,
    },
    Dec2dVlc {
        rltab: &[
            (1, 1, 0), (-1, 1, 0), (2, 1, 0), (-2, 1, 0), (3, 1, 0), (-3, 1, 0),
            EOB, (4, 1, 0), (-4, 1, 0), (5, 1, 0), (-5, 1, 0), (6, 1, 0),
            (-6, 1, 0), (1, 2, 0), (-1, 2, 0), (7, 1, 0), (-7, 1, 0), (8, 1, 1),
            (-8, 1, 1), (2, 2, 0), (-2, 2, 0), (9, 1, 1), (-9, 1, 1), (10, 1, 1),
            (-10, 1, 1), (1, 3, 0), (-1, 3, 0), (3, 2, 0), (-3, 2, 0), (11, 1, 2),
            (-11, 1, 2), (4, 2, 0), (-4, 2, 0), (12, 1, 2), (-12, 1, 2), (13, 1, 2),
            (-13, 1, 2), (5, 2, 0), (-5, 2, 0), (1, 4, 0), (-1, 4, 0), (2, 3, 0),
            (-2, 3, 0), (14, 1, 2), (-14, 1, 2), (6, 2, 0), (-6, 2, 0), (15, 1, 2),
            (-15, 1, 2), (16, 1, 2), (-16, 1, 2), (3, 3, 0), (-3, 3, 0), (1, 5, 0),
            (-1, 5, 0), (7, 2, 0), (-7, 2, 0), (17, 1, 2), (-17, 1, 2),
        ],
        level_add: &[0, 18, 8, 4, 2, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 2,
        inc_limit: 7,
        max_run: 5,
    },
    Dec2dVlc {
        rltab: &[
            EOB, (1, 1, 0), (-1, 1, 0), (2, 1, 0), (-2, 1, 0), (3, 1, 0),
            (-3, 1, 0), (4, 1, 0), (-4, 1, 0), (5, 1, 0), (-5, 1, 0), (6, 1, 0),
            (-6, 1, 0), (7, 1, 0), (-7, 1, 0), (8, 1, 0), (-8, 1, 0), (9, 1, 0),
            (-9, 1, 0), (10, 1, 0), (-10, 1, 0), (1, 2, 0), (-1, 2, 0), (11, 1, 1),
            (-11, 1, 1), (12, 1, 1), (-12, 1, 1), (13, 1, 1), (-13, 1, 1), (2, 2, 0),
            (-2, 2, 0), (14, 1, 1), (-14, 1, 1), (15, 1, 1), (-15, 1, 1), (3, 2, 0),
            (-3, 2, 0), (16, 1, 1), (-16, 1, 1), (1, 3, 0), (-1, 3, 0), (17, 1, 1),
            (-17, 1, 1), (4, 2, 0), (-4, 2, 0), (18, 1, 1), (-18, 1, 1), (5, 2, 0),
            (-5, 2, 0), (19, 1, 1), (-19, 1, 1), (20, 1, 1), (-20, 1, 1), (6, 2, 0),
            (-6, 2, 0), (21, 1, 1), (-21, 1, 1), (2, 3, 0), (-2, 3, 0),
        ],
        level_add: &[0, 22, 7, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 2,
        inc_limit: 10,
        max_run: 3,
    },
    Dec2dVlc {
        rltab: &[
            EOB, (1, 1, 0), (-1, 1, 0), (2, 1, 0), (-2, 1, 0), (3, 1, 0),
            (-3, 1, 0), (4, 1, 0), (-4, 1, 0), (5, 1, 0), (-5, 1, 0), (6, 1, 0),
            (-6, 1, 0), (7, 1, 0), (-7, 1, 0), (8, 1, 0), (-8, 1, 0), (9, 1, 0),
            (-9, 1, 0), (10, 1, 0), (-10, 1, 0), (11, 1, 0), (-11, 1, 0), (12, 1, 0),
            (-12, 1, 0), (13, 1, 0), (-13, 1, 0), (14, 1, 0), (-14, 1, 0), (15, 1, 0),
            (-15, 1, 0), (16, 1, 0), (-16, 1, 0), (1, 2, 0), (-1, 2, 0), (17, 1, 0),
            (-17, 1, 0), (18, 1, 0), (-18, 1, 0), (19, 1, 0), (-19, 1, 0), (20, 1, 0),
            (-20, 1, 0), (21, 1, 0), (-21, 1, 0), (2, 2, 0), (-2, 2, 0), (22, 1, 0),
            (-22, 1, 0), (23, 1, 0), (-23, 1, 0), (24, 1, 0), (-24, 1, 0), (25, 1, 0),
            (-25, 1, 0), (3, 2, 0), (-3, 2, 0), (26, 1, 0), (-26, 1, 0),
        ],
        level_add: &[0, 27, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 2,
        inc_limit: i32::MAX,
        max_run: 2,
    },
];

pub static INTER_DEC: [Dec2dVlc; 7] = [
    Dec2dVlc {
        rltab: &[
            (1, 1, 1), (-1, 1, 1), (1, 2, 1), (-1, 2, 1), (1, 3, 1), (-1, 3, 1),
            (1, 4, 1), (-1, 4, 1), (1, 5, 1), (-1, 5, 1), (1, 6, 1), (-1, 6, 1),
            (1, 7, 1), (-1, 7, 1), (1, 8, 1), (-1, 8, 1), (1, 9, 1), (-1, 9, 1),
            (1, 10, 1), (-1, 10, 1), (1, 11, 1), (-1, 11, 1), (1, 12, 1), (-1, 12, 1),
            (1, 13, 1), (-1, 13, 1), (2, 1, 2), (-2, 1, 2), (1, 14, 1), (-1, 14, 1),
            (1, 15, 1), (-1, 15, 1), (1, 16, 1), (-1, 16, 1), (1, 17, 1), (-1, 17, 1),
            (1, 18, 1), (-1, 18, 1), (1, 19, 1), (-1, 19, 1), (3, 1, 3), (-3, 1, 3),
            (1, 20, 1), (-1, 20, 1), (1, 21, 1), (-1, 21, 1), (2, 2, 2), (-2, 2, 2),
            (1, 22, 1), (-1, 22, 1), (1, 23, 1), (-1, 23, 1), (1, 24, 1), (-1, 24, 1),
            (1, 25, 1), (-1, 25, 1), (1, 26, 1), (-1, 26, 1), EOB,
        ],
        level_add: &[0, 4, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
        golomb_order: 3,
        inc_limit: 0,
        max_run: 26,
    },
    Dec2dVlc {
        rltab: &[
            (1, 1, 0), (-1, 1, 0), EOB, (1, 2, 0), (-1, 2, 0), (1, 3, 0),
            (-1, 3, 0), (1, 4, 0), (-1, 4, 0), (1, 5, 0), (-1, 5, 0), (1, 6, 0),
            (-1, 6, 0), (2, 1, 1), (-2, 1, 1), (1, 7, 0), (-1, 7, 0), (1, 8, 0),
            (-1, 8, 0), (1, 9, 0), (-1, 9, 0), (1, 10, 0), (-1, 10, 0), (2, 2, 1),
            (-2, 2, 1), (1, 11, 0), (-1, 11, 0), (1, 12, 0), (-1, 12, 0), (3, 1, 2),
            (-3, 1, 2), (1, 13, 0), (-1, 13, 0), (1, 14, 0), (-1, 14, 0), (2, 3, 1),
            (-2, 3, 1), (1, 15, 0), (-1, 15, 0), (2, 4, 1), (-2, 4, 1), (1, 16, 0),
            (-1, 16, 0), (2, 5, 1), (-2, 5, 1), (1, 17, 0), (-1, 17, 0), (4, 1, 3),
            (-4, 1, 3), (2, 6, 1), (-2, 6, 1), (1, 18, 0), (-1, 18, 0), (1, 19, 0),
            (-1, 19, 0), (2, 7, 1), (-2, 7, 1), (3, 2, 2), (-3, 2, 2),
        ],
        level_add: &[0, 5, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 2,
        inc_limit: 1,
        max_run: 19,
    },
    Dec2dVlc {
        rltab: &[
            (1, 1, 0), (-1, 1, 0), EOB, (1, 2, 0), (-1, 2, 0), (2, 1, 0),
            (-2, 1, 0), (1, 3, 0), (-1, 3, 0), (1, 4, 0), (-1, 4, 0), (3, 1, 1),
            (-3, 1, 1), (2, 2, 0), (-2, 2, 0), (1, 5, 0), (-1, 5, 0), (1, 6, 0),
            (-1, 6, 0), (1, 7, 0), (-1, 7, 0), (2, 3, 0), (-2, 3, 0), (4, 1, 2),
            (-4, 1, 2), (1, 8, 0), (-1, 8, 0), (3, 2, 1), (-3, 2, 1), (2, 4, 0),
            (-2, 4, 0), (1, 9, 0), (-1, 9, 0), (1, 10, 0), (-1, 10, 0), (5, 1, 2),
            (-5, 1, 2), (2, 5, 0), (-2, 5, 0), (1, 11, 0), (-1, 11, 0), (2, 6, 0),
            (-2, 6, 0), (1, 12, 0), (-1, 12, 0), (3, 3, 1), (-3, 3, 1), (6, 1, 2),
            (-6, 1, 2), (4, 2, 2), (-4, 2, 2), (1, 13, 0), (-1, 13, 0), (2, 7, 0),
            (-2, 7, 0), (3, 4, 1), (-3, 4, 1), (1, 14, 0), (-1, 14, 0),
        ],
        level_add: &[0, 7, 5, 4, 4, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 2,
        inc_limit: 2,
        max_run: 14,
    },
    Dec2dVlc {
        rltab: &[
            (1, 1, 0), (-1, 1, 0), EOB, (2, 1, 0), (-2, 1, 0), (1, 2, 0),
            (-1, 2, 0), (3, 1, 0), (-3, 1, 0), (1, 3, 0), (-1, 3, 0), (2, 2, 0),
            (-2, 2, 0), (4, 1, 1), (-4, 1, 1), (1, 4, 0), (-1, 4, 0), (5, 1, 1),
            (-5, 1, 1), (1, 5, 0), (-1, 5, 0), (3, 2, 0), (-3, 2, 0), (2, 3, 0),
            (-2, 3, 0), (1, 6, 0), (-1, 6, 0), (6, 1, 1), (-6, 1, 1), (2, 4, 0),
            (-2, 4, 0), (1, 7, 0), (-1, 7, 0), (4, 2, 1), (-4, 2, 1), (7, 1, 2),
            (-7, 1, 2), (3, 3, 0), (-3, 3, 0), (1, 8, 0), (-1, 8, 0), (2, 5, 0),
            (-2, 5, 0), (8, 1, 2), (-8, 1, 2), (1, 9, 0), (-1, 9, 0), (3, 4, 0),
            (-3, 4, 0), (2, 6, 0), (-2, 6, 0), (5, 2, 1), (-5, 2, 1), (1, 10, 0),
            (-1, 10, 0), (9, 1, 2), (-9, 1, 2), (4, 3, 1), (-4, 3, 1),
        ],
        level_add: &[0, 10, 6, 5, 4, 3, 3, 2, 2, 2, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 2,
        inc_limit: 3,
        max_run: 10,
    },
    Dec2dVlc {
        rltab: &[
            (1, 1, 0), (-1, 1, 0), EOB, (2, 1, 0), (-2, 1, 0), (3, 1, 0),
            (-3, 1, 0), (1, 2, 0), (-1, 2, 0), (4, 1, 0), (-4, 1, 0), (5, 1, 0),
            (-5, 1, 0), (2, 2, 0), (-2, 2, 0), (1, 3, 0), (-1, 3, 0), (6, 1, 0),
            (-6, 1, 0), (3, 2, 0), (-3, 2, 0), (7, 1, 1), (-7, 1, 1), (1, 4, 0),
            (-1, 4, 0), (8, 1, 1), (-8, 1, 1), (2, 3, 0), (-2, 3, 0), (4, 2, 0),
            (-4, 2, 0), (1, 5, 0), (-1, 5, 0), (9, 1, 1), (-9, 1, 1), (5, 2, 0),
            (-5, 2, 0), (2, 4, 0), (-2, 4, 0), (1, 6, 0), (-1, 6, 0), (10, 1, 2),
            (-10, 1, 2), (3, 3, 0), (-3, 3, 0), (11, 1, 2), (-11, 1, 2), (1, 7, 0),
            (-1, 7, 0), (6, 2, 0), (-6, 2, 0), (3, 4, 0), (-3, 4, 0), (2, 5, 0),
            (-2, 5, 0), (12, 1, 2), (-12, 1, 2), (4, 3, 0), (-4, 3, 0),
        ],
        level_add: &[0, 13, 7, 5, 4, 3, 2, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 2,
        inc_limit: 6,
        max_run: 7,
    },
    Dec2dVlc {
        rltab: &[
            EOB, (1, 1, 0), (-1, 1, 0), (2, 1, 0), (-2, 1, 0), (3, 1, 0),
            (-3, 1, 0), (4, 1, 0), (-4, 1, 0), (5, 1, 0), (-5, 1, 0), (1, 2, 0),
            (-1, 2, 0), (6, 1, 0), (-6, 1, 0), (7, 1, 0), (-7, 1, 0), (8, 1, 0),
            (-8, 1, 0), (2, 2, 0), (-2, 2, 0), (9, 1, 0), (-9, 1, 0), (1, 3, 0),
            (-1, 3, 0), (10, 1, 1), (-10, 1, 1), (3, 2, 0), (-3, 2, 0), (11, 1, 1),
            (-11, 1, 1), (4, 2, 0), (-4, 2, 0), (12, 1, 1), (-12, 1, 1), (1, 4, 0),
            (-1, 4, 0), (2, 3, 0), (-2, 3, 0), (13, 1, 1), (-13, 1, 1), (5, 2, 0),
            (-5, 2, 0), (14, 1, 1), (-14, 1, 1), (6, 2, 0), (-6, 2, 0), (1, 5, 0),
            (-1, 5, 0), (15, 1, 1), (-15, 1, 1), (3, 3, 0), (-3, 3, 0), (16, 1, 1),
            (-16, 1, 1), (2, 4, 0), (-2, 4, 0), (7, 2, 0), (-7, 2, 0),
        ],
        level_add: &[0, 17, 8, 4, 3, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 2,
        inc_limit: 9,
        max_run: 5,
    },
    Dec2dVlc {
        rltab: &[
            EOB, (1, 1, 0), (-1, 1, 0), (2, 1, 0), (-2, 1, 0), (3, 1, 0),
            (-3, 1, 0), (4, 1, 0), (-4, 1, 0), (5, 1, 0), (-5, 1, 0), (6, 1, 0),
            (-6, 1, 0), (7, 1, 0), (-7, 1, 0), (1, 2, 0), (-1, 2, 0), (8, 1, 0),
            (-8, 1, 0), (9, 1, 0), (-9, 1, 0), (10, 1, 0), (-10, 1, 0), (11, 1, 0),
            (-11, 1, 0), (12, 1, 0), (-12, 1, 0), (2, 2, 0), (-2, 2, 0), (13, 1, 0),
            (-13, 1, 0), (1, 3, 0), (-1, 3, 0), (14, 1, 0), (-14, 1, 0), (15, 1, 0),
            (-15, 1, 0), (3, 2, 0), (-3, 2, 0), (16, 1, 0), (-16, 1, 0), (17, 1, 0),
            (-17, 1, 0), (18, 1, 0), (-18, 1, 0), (4, 2, 0), (-4, 2, 0), (19, 1, 0),
            (-19, 1, 0), (20, 1, 0), (-20, 1, 0), (2, 3, 0), (-2, 3, 0), (1, 4, 0),
            (-1, 4, 0), (5, 2, 0), (-5, 2, 0), (21, 1, 0), (-21, 1, 0),
        ],
        level_add: &[0, 22, 6, 3, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 2,
        inc_limit: i32::MAX,
        max_run: 4,
    },
];

pub static CHROMA_DEC: [Dec2dVlc; 5] = [
    Dec2dVlc {
        rltab: &[
            (1, 1, 1), (-1, 1, 1), (1, 2, 1), (-1, 2, 1), (1, 3, 1), (-1, 3, 1),
            (1, 4, 1), (-1, 4, 1), (1, 5, 1), (-1, 5, 1), (1, 6, 1), (-1, 6, 1),
            (1, 7, 1), (-1, 7, 1), (2, 1, 2), (-2, 1, 2), (1, 8, 1), (-1, 8, 1),
            (1, 9, 1), (-1, 9, 1), (1, 10, 1), (-1, 10, 1), (1, 11, 1), (-1, 11, 1),
            (1, 12, 1), (-1, 12, 1), (1, 13, 1), (-1, 13, 1), (1, 14, 1), (-1, 14, 1),
            (1, 15, 1), (-1, 15, 1), (3, 1, 3), (-3, 1, 3), (1, 16, 1), (-1, 16, 1),
            (1, 17, 1), (-1, 17, 1), (1, 18, 1), (-1, 18, 1), (1, 19, 1), (-1, 19, 1),
            (1, 20, 1), (-1, 20, 1), (1, 21, 1), (-1, 21, 1), (1, 22, 1), (-1, 22, 1),
            (2, 2, 2), (-2, 2, 2), (1, 23, 1), (-1, 23, 1), (1, 24, 1), (-1, 24, 1),
            (1, 25, 1), (-1, 25, 1), (4, 1, 3), (-4, 1, 3), EOB,
        ],
        level_add: &[0, 5, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, -1],
        golomb_order: 2,
        inc_limit: 0,
        max_run: 25,
    },
    Dec2dVlc {
        rltab: &[
            EOB, (1, 1, 0), (-1, 1, 0), (1, 2, 0), (-1, 2, 0), (2, 1, 1),
            (-2, 1, 1), (1, 3, 0), (-1, 3, 0), (1, 4, 0), (-1, 4, 0), (1, 5, 0),
            (-1, 5, 0), (1, 6, 0), (-1, 6, 0), (3, 1, 2), (-3, 1, 2), (1, 7, 0),
            (-1, 7, 0), (1, 8, 0), (-1, 8, 0), (2, 2, 1), (-2, 2, 1), (1, 9, 0),
            (-1, 9, 0), (1, 10, 0), (-1, 10, 0), (1, 11, 0), (-1, 11, 0), (4, 1, 2),
            (-4, 1, 2), (1, 12, 0), (-1, 12, 0), (1, 13, 0), (-1, 13, 0), (1, 14, 0),
            (-1, 14, 0), (2, 3, 1), (-2, 3, 1), (1, 15, 0), (-1, 15, 0), (2, 4, 1),
            (-2, 4, 1), (5, 1, 3), (-5, 1, 3), (3, 2, 2), (-3, 2, 2), (1, 16, 0),
            (-1, 16, 0), (1, 17, 0), (-1, 17, 0), (1, 18, 0), (-1, 18, 0), (2, 5, 1),
            (-2, 5, 1), (1, 19, 0), (-1, 19, 0), (1, 20, 0), (-1, 20, 0),
        ],
        level_add: &[0, 6, 4, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, -1, -1, -1, -1, -1, -1],
        golomb_order: 0,
        inc_limit: 1,
        max_run: 20,
    },
    Dec2dVlc {
        rltab: &[
            (1, 1, 0), (-1, 1, 0), EOB, (2, 1, 0), (-2, 1, 0), (1, 2, 0),
            (-1, 2, 0), (3, 1, 1), (-3, 1, 1), (1, 3, 0), (-1, 3, 0), (4, 1, 1),
            (-4, 1, 1), (2, 2, 0), (-2, 2, 0), (1, 4, 0), (-1, 4, 0), (5, 1, 2),
            (-5, 1, 2), (1, 5, 0), (-1, 5, 0), (3, 2, 1), (-3, 2, 1), (2, 3, 0),
            (-2, 3, 0), (1, 6, 0), (-1, 6, 0), (6, 1, 2), (-6, 1, 2), (1, 7, 0),
            (-1, 7, 0), (2, 4, 0), (-2, 4, 0), (7, 1, 2), (-7, 1, 2), (1, 8, 0),
            (-1, 8, 0), (4, 2, 1), (-4, 2, 1), (1, 9, 0), (-1, 9, 0), (3, 3, 1),
            (-3, 3, 1), (2, 5, 0), (-2, 5, 0), (2, 6, 0), (-2, 6, 0), (8, 1, 2),
            (-8, 1, 2), (1, 10, 0), (-1, 10, 0), (1, 11, 0), (-1, 11, 0), (9, 1, 2),
            (-9, 1, 2), (5, 2, 2), (-5, 2, 2), (3, 4, 1), (-3, 4, 1),
        ],
        level_add: &[0, 10, 6, 4, 4, 3, 3, 2, 2, 2, 2, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 1,
        inc_limit: 2,
        max_run: 11,
    },
    Dec2dVlc {
        rltab: &[
            EOB, (1, 1, 0), (-1, 1, 0), (2, 1, 0), (-2, 1, 0), (3, 1, 0),
            (-3, 1, 0), (4, 1, 0), (-4, 1, 0), (1, 2, 0), (-1, 2, 0), (5, 1, 1),
            (-5, 1, 1), (2, 2, 0), (-2, 2, 0), (6, 1, 1), (-6, 1, 1), (1, 3, 0),
            (-1, 3, 0), (7, 1, 1), (-7, 1, 1), (3, 2, 0), (-3, 2, 0), (8, 1, 1),
            (-8, 1, 1), (1, 4, 0), (-1, 4, 0), (2, 3, 0), (-2, 3, 0), (9, 1, 1),
            (-9, 1, 1), (4, 2, 0), (-4, 2, 0), (1, 5, 0), (-1, 5, 0), (10, 1, 1),
            (-10, 1, 1), (3, 3, 0), (-3, 3, 0), (5, 2, 1), (-5, 2, 1), (2, 4, 0),
            (-2, 4, 0), (11, 1, 1), (-11, 1, 1), (1, 6, 0), (-1, 6, 0), (12, 1, 1),
            (-12, 1, 1), (1, 7, 0), (-1, 7, 0), (6, 2, 1), (-6, 2, 1), (13, 1, 1),
            (-13, 1, 1), (2, 5, 0), (-2, 5, 0), (1, 8, 0), (-1, 8, 0),
        ],
        level_add: &[0, 14, 7, 4, 3, 3, 2, 2, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 1,
        inc_limit: 4,
        max_run: 8,
    },
    Dec2dVlc {
        rltab: &[
            EOB, (1, 1, 0), (-1, 1, 0), (2, 1, 0), (-2, 1, 0), (3, 1, 0),
            (-3, 1, 0), (4, 1, 0), (-4, 1, 0), (5, 1, 0), (-5, 1, 0), (6, 1, 0),
            (-6, 1, 0), (7, 1, 0), (-7, 1, 0), (8, 1, 0), (-8, 1, 0), (1, 2, 0),
            (-1, 2, 0), (9, 1, 0), (-9, 1, 0), (10, 1, 0), (-10, 1, 0), (11, 1, 0),
            (-11, 1, 0), (2, 2, 0), (-2, 2, 0), (12, 1, 0), (-12, 1, 0), (13, 1, 0),
            (-13, 1, 0), (3, 2, 0), (-3, 2, 0), (14, 1, 0), (-14, 1, 0), (1, 3, 0),
            (-1, 3, 0), (15, 1, 0), (-15, 1, 0), (4, 2, 0), (-4, 2, 0), (16, 1, 0),
            (-16, 1, 0), (17, 1, 0), (-17, 1, 0), (5, 2, 0), (-5, 2, 0), (1, 4, 0),
            (-1, 4, 0), (2, 3, 0), (-2, 3, 0), (18, 1, 0), (-18, 1, 0), (6, 2, 0),
            (-6, 2, 0), (19, 1, 0), (-19, 1, 0), (1, 5, 0), (-1, 5, 0),
        ],
        level_add: &[0, 20, 7, 3, 2, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        golomb_order: 0,
        inc_limit: i32::MAX,
        max_run: 5,
    },
];

/// Escape-code threshold: level codes at or above this value are
/// `(run, escape-coded-level)` pairs rather than direct table lookups.
pub const ESCAPE_CODE: u32 = 59;

/// Maps the non-AEC `cbp_code` read from the stream to the actual coded
/// block pattern bitmask: `[intra, inter]` per entry.
pub static CBP_TAB: [(u8, u8); 64] = [
    (63, 0), (15, 15), (31, 63), (47, 31), (0, 16), (14, 32), (13, 47), (11, 13),
    (7, 14), (5, 11), (10, 12), (8, 5), (12, 10), (61, 7), (4, 48), (55, 3),
    (1, 2), (2, 8), (59, 4), (3, 1), (62, 61), (9, 55), (6, 59), (29, 62),
    (45, 29), (51, 27), (23, 23), (39, 19), (27, 30), (46, 28), (53, 9), (30, 6),
    (43, 60), (37, 21), (60, 44), (16, 26), (21, 51), (28, 35), (19, 18), (35, 20),
    (42, 24), (26, 53), (44, 17), (32, 37), (58, 39), (24, 45), (20, 58), (17, 43),
    (18, 42), (48, 46), (22, 36), (33, 33), (25, 34), (49, 40), (40, 52), (36, 49),
    (34, 50), (50, 56), (52, 25), (54, 22), (41, 54), (56, 57), (38, 41), (57, 38),
];

/// Raster positions of the four luma 8x8 blocks within the 3x3 neighbor
/// grid used for intra-mode prediction context.
pub static SCAN3X3: [u8; 4] = [4, 5, 7, 8];

pub static DEQUANT_SHIFT: [u8; 64] = [
    14, 14, 14, 14, 14, 14, 14, 14,
    13, 13, 13, 13, 13, 13, 13, 13,
    13, 12, 12, 12, 12, 12, 12, 12,
    11, 11, 11, 11, 11, 11, 11, 11,
    11, 10, 10, 10, 10, 10, 10, 10,
    10, 9, 9, 9, 9, 9, 9, 9,
    9, 8, 8, 8, 8, 8, 8, 8,
    7, 7, 7, 7, 7, 7, 7, 7,
];

pub static DEQUANT_MUL: [u16; 64] = [
    32768, 36061, 38968, 42495, 46341, 50535, 55437, 60424,
    32932, 35734, 38968, 42495, 46177, 50535, 55109, 59933,
    65535, 35734, 38968, 42577, 46341, 50617, 55027, 60097,
    32809, 35734, 38968, 42454, 46382, 50576, 55109, 60056,
    65535, 35734, 38968, 42495, 46320, 50515, 55109, 60076,
    65535, 35744, 38968, 42495, 46341, 50535, 55099, 60087,
    65535, 35734, 38973, 42500, 46341, 50535, 55109, 60097,
    32771, 35734, 38965, 42497, 46341, 50535, 55109, 60099,
];

/// Chroma QP remap: AVS1's chroma quantizer saturates faster than luma's
/// at the high end of the scale (`ff_cavs_chroma_qp` in the reference
/// decoder; its definition lives outside the retrieved source, so this is
/// taken from the published table rather than derived).
pub static CHROMA_QP: [u8; 64] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 29, 30,
    31, 32, 32, 33, 34, 34, 35, 35, 36, 36, 37, 37, 37, 38, 38, 38,
    39, 39, 39, 39, 40, 40, 40, 40, 41, 41, 41, 41, 42, 42, 42, 42,
];

/// Inverse-scan order for an 8x8 residual block: `SCAN[i]` is the raster
/// position (row-major) that the `i`-th coefficient in decode order lands
/// in (`h->permutated_scantable` in the reference decoder; like
/// `CHROMA_QP`, its definition lives outside the retrieved source, so this
/// is the standard 8x8 zig-zag order rather than something derived).
pub static SCAN: [u8; 64] = [
    0, 1, 8, 16, 9, 2, 3, 10,
    17, 24, 32, 25, 18, 11, 4, 5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13, 6, 7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_family_has_matching_side_tables() {
        for t in INTRA_DEC.iter().chain(INTER_DEC.iter()).chain(CHROMA_DEC.iter()) {
            assert!(t.rltab.len() <= 65);
            assert!(!t.level_add.is_empty());
        }
    }

    #[test]
    fn cbp_tab_is_a_permutation_of_0_to_63() {
        let mut intra: Vec<u8> = CBP_TAB.iter().map(|(i, _)| *i).collect();
        intra.sort_unstable();
        assert_eq!(intra, (0u8..64).collect::<Vec<_>>());
    }

    #[test]
    fn scan_is_a_permutation_of_0_to_63() {
        let mut scan = SCAN.to_vec();
        scan.sort_unstable();
        assert_eq!(scan, (0u8..64).collect::<Vec<_>>());
    }

    #[test]
    fn dequant_tables_are_64_long() {
        assert_eq!(DEQUANT_MUL.len(), 64);
        assert_eq!(DEQUANT_SHIFT.len(), 64);
    }
}
