use super::datum::Datum;
use crate::source::Location;
use quickcheck::{Arbitrary, Gen};

/// Generators for the round-trip property tests.
///
/// Symbols are drawn from a pool of identifiers the lexer reproduces
/// verbatim (lowercase, delimiter friendly) and numbers are dyadic
/// rationals so their printed form reads back to the same value.
impl Arbitrary for Datum {
    fn arbitrary(g: &mut Gen) -> Self {
        arbitrary_datum(g, 3)
    }
}

fn arbitrary_datum(g: &mut Gen, depth: usize) -> Datum {
    let location = Location::synthetic();
    let variant = if depth == 0 {
        *g.choose(&[0, 1, 2, 3, 4]).unwrap()
    } else {
        *g.choose(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap()
    };

    match variant {
        0 => Datum::boolean(bool::arbitrary(g), location),
        1 => Datum::number(i32::arbitrary(g) as f64 / 8.0, location),
        2 => Datum::character(arbitrary_char(g), location),
        3 => Datum::string(arbitrary_string(g), location),
        4 => Datum::symbol(*g.choose(SYMBOLS).unwrap(), location),
        5 => Datum::list(arbitrary_elements(g, depth - 1), location),
        6 => {
            let head = vec![arbitrary_datum(g, depth - 1)];
            let tail = arbitrary_datum(g, 0);
            Datum::improper_list(head, tail, location)
        }
        7 => Datum::vector(arbitrary_elements(g, depth - 1), location),
        _ => Datum::quote(arbitrary_datum(g, depth - 1), location),
    }
}

const SYMBOLS: &[&str] = &[
    "foo",
    "bar",
    "list->vector",
    "+",
    "-",
    "...",
    "a34ktmns",
    "the-word-recursion-has-many-meanings",
    "<=?",
];

fn arbitrary_elements(g: &mut Gen, depth: usize) -> Vec<Datum> {
    let len = *g.choose(&[0, 1, 2, 3]).unwrap();
    (0..len).map(|_| arbitrary_datum(g, depth)).collect()
}

fn arbitrary_char(g: &mut Gen) -> char {
    *g.choose(&['a', 'z', '0', '(', '"', ';', ' ', '\n', '☆'])
        .unwrap()
}

fn arbitrary_string(g: &mut Gen) -> String {
    let parts = ["", "hello world", "two\nlines", "say \"hi\"", "back\\slash", "☆"];
    (*g.choose(&parts).unwrap()).to_string()
}
