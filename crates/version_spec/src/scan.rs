// splits a version string into runs of digits, runs of separators and runs of anything else
//
// "1.0-rc1"  -> Digits("1") Seps(".") Digits("0") Seps("-") Text("rc") Digits("1")
// "1..2a"    -> Digits("1") Seps("..") Digits("2") Text("a")

pub const SEPARATORS: &[char] = &['.', '-', '_'];

pub fn is_sep(c: char) -> bool {
    SEPARATORS.contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Digit,
    Sep,
    Text,
}

fn classify(c: char) -> Class {
    if c.is_ascii_digit() {
        Class::Digit
    } else if is_sep(c) {
        Class::Sep
    } else {
        Class::Text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Digits(&'a str),
    Seps(&'a str),
    Text(&'a str),
}

#[derive(Clone)]
pub struct PieceIter<'a> {
    s: &'a str,
}

pub fn pieces(s: &str) -> PieceIter<'_> {
    PieceIter { s }
}

impl<'a> Iterator for PieceIter<'a> {
    type Item = Piece<'a>;
    fn next(&mut self) -> Option<Self::Item> {

        let first = self.s.chars().next()?;
        let class = classify(first);

        // chop off all leading chars of the same class
        let end = self.s.char_indices()
            .find(|(_, c)| classify(*c) != class)
            .map_or(self.s.len(), |(idx, _)| idx);

        let part = &self.s[..end];
        self.s = &self.s[end..];

        Some(match class {
            Class::Digit => Piece::Digits(part),
            Class::Sep => Piece::Seps(part),
            Class::Text => Piece::Text(part),
        })
    }
}
