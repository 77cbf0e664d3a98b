pub mod numeric;
pub mod parse;
pub mod size;
pub mod units;

/// Unit letters by power: index `i` is `multiplier^(i + 1)` bytes.
pub const UNIT_LETTERS: [char; 8] = [K, M, G, T, P, E, Z, Y];

const K: char = 'K';
const M: char = 'M';
const G: char = 'G';
const T: char = 'T';
const P: char = 'P';
const E: char = 'E';
const Z: char = 'Z';
const Y: char = 'Y';

/// SI spells the first step in lowercase.
const SI_KILO: char = 'k';

const BYTE: &str = "byte";
const BYTE_LETTER: char = 'B';

const SUFFIX: &str = "B";
const IEC_SUFFIX: &str = "iB";

const DECIMAL_POINT: char = '.';
const GROUP_SEPARATOR: char = ',';
