use std::io::{self, Write};

use crate::demo::run_demo;
use crate::tally::Tally;

// Downstream output checks depend on the exact bytes of the greeting line.
pub const GREETING_TEMPLATE: &str =
    "this_is_a_function_with_a_much_longer_name_than_the_others";

/// Writes the greeting line with `s` substituted verbatim, then runs the
/// demo against the same tally and writer.
pub fn greet<W: Write>(tally: &mut Tally, s: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "{GREETING_TEMPLATE}({s})")?;
    run_demo(tally, out)
}

#[cfg(test)]
mod tests {
    use super::greet;
    use crate::tally::Tally;

    #[test]
    fn greeting_line_precedes_demo_output() {
        let mut tally = Tally::new();
        let mut out = Vec::new();
        greet(&mut tally, "hello", &mut out).expect("write to vec");
        let output = String::from_utf8(out).expect("utf8 output");
        assert_eq!(
            output,
            "this_is_a_function_with_a_much_longer_name_than_the_others(hello)\n\
             once: 0\ntwice: 2\nthrice: 103\n"
        );
    }

    #[test]
    fn input_is_substituted_verbatim() {
        let mut tally = Tally::new();
        let mut out = Vec::new();
        greet(&mut tally, "a b\tc", &mut out).expect("write to vec");
        let output = String::from_utf8(out).expect("utf8 output");
        let first_line = output.lines().next().expect("at least one line");
        assert_eq!(
            first_line,
            "this_is_a_function_with_a_much_longer_name_than_the_others(a b\tc)"
        );
    }
}
