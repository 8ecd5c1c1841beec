use std::io::{self, Write};

use crate::tally::Tally;

pub const DEMO_STEPS: &[(&str, i64, i64)] = &[
    ("once", 2, 9),
    ("twice", -6, 1),
    ("thrice", 100, 0),
];

/// Drives three fixed accumulate calls against `tally`, writing one
/// `<label>: <result>` line per call. The mutations persist: running the
/// demo again on the same tally continues from the accumulated value.
pub fn run_demo<W: Write>(tally: &mut Tally, out: &mut W) -> io::Result<()> {
    for (label, a, b) in DEMO_STEPS {
        let result = tally.accumulate(*a, *b);
        writeln!(out, "{label}: {result}")?;
    }
    Ok(())
}
