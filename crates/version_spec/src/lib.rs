// version spec: parse, compare and render version strings
//
// --- General rules ---
//
// 1. A version is split on '.', '-' and '_', and wherever digits meet non-digits.
//    example: 1.0-rc1 -> (1, 0, "rc", 1)
//
// 2. Numbers compare numerically, of any length. Leading zeros are dropped.
//    example: 9 < 10 < 0011 < 18446744073709551616
//
// 3. A number is GREATER than a qualifier at the same position.
//    example: 1.0-beta < 1.0.1
//
// 4. Qualifiers compare by rank (see qualifier.rs), then by canonical name. Unknown
//    qualifiers are LESS than known ones and compare by their lowercased text.
//    example: 1.0-foo < 1.0-alpha < 1.0-rc1 < 1.0-SNAPSHOT < 1.0
//             1-final-1 < 1-ga-1 < 1-release-1
//
// 5. Trailing zeros and trailing release qualifiers are not significant.
//    example: 1 == 1.0 == 1.0.0 == 1.0.Final == 1-ga
//
// 6. When one version runs out of segments, it continues as zeros.
//    example: 1.0 < 1.0.1
//             1.0-beta < 1.0
//
// 7. Nothing fails to parse. Unexpected characters are qualifier text.
//    example: 1+2 -> (1, "+", 2)
//
// --- Rendering ---
//
// Segments are joined with the separator found before them in the original text. Runs
// of separators collapse to the last one, leading and trailing separators are dropped.
//
// example: 01.002.0        -> 1.2.0
//          1..-2           -> 1-2
//          1.0.0.final     -> 1.0.0.Final
//          3.14.0rc1       -> 3.14.0rc1

mod qualifier;
mod scan;

pub use qualifier::{Qualifier, Rank};

use scan::Piece;

// --- Separator -----------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// first segment, or a digit/non-digit boundary
    None,
    Dot,
    Dash,
    Underscore,
}

impl Separator {

    // takes the last char of a run of separators
    fn from_run(run: &str) -> Self {
        match run.chars().last() {
            Some('.') => Separator::Dot,
            Some('-') => Separator::Dash,
            Some('_') => Separator::Underscore,
            _ => Separator::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::None => "",
            Separator::Dot => ".",
            Separator::Dash => "-",
            Separator::Underscore => "_",
        }
    }
}

// ---/Separator -----------------------------------------------------

// --- Number --------------------------------------------------------

/// An unsigned integer of any length, kept as decimal digits without leading zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    digits: String,
}

impl Number {

    fn new(raw: &str) -> Self {
        let digits = raw.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };
        Self { digits: digits.to_string() }
    }

    pub fn as_str(&self) -> &str {
        self.digits.as_str()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // no leading zeros, so more digits is a bigger number
        self.digits.len().cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

// ---/Number --------------------------------------------------------

// --- Segment -------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Number(Number),
    Qualifier(Qualifier),
}

impl Segment {

    // trailing segments like this do not change the version
    fn is_release_equivalent(&self) -> bool {
        match self {
            Segment::Number(n) => n.is_zero(),
            Segment::Qualifier(q) => q.is_release(),
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Segment {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Segment::Number(n1), Segment::Number(n2)) => n1.cmp(n2),
            (Segment::Qualifier(q1), Segment::Qualifier(q2)) => q1.cmp(q2),
            // a number is greater than a qualifier
            (Segment::Number(_), Segment::Qualifier(_)) => std::cmp::Ordering::Greater,
            (Segment::Qualifier(_), Segment::Number(_)) => std::cmp::Ordering::Less,
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Number(n) => f.write_str(n.as_str()),
            Segment::Qualifier(q) => f.write_str(q.rendered()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Component {
    pub sep: Separator,
    pub segment: Segment,
}

// ---/Segment -------------------------------------------------------

// --- VersionSpec ---------------------------------------------------

#[derive(Debug, Clone)]
pub struct VersionSpec {
    original: String,
    components: Vec<Component>,
}

impl VersionSpec {

    /// The text this version was parsed from.
    pub fn original(&self) -> &str {
        self.original.as_str()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.components.iter().map(|c| &c.segment)
    }

    // everything up to the last segment that is not a trailing zero or release qualifier
    fn significant(&self) -> &[Component] {
        let end = self.components.iter()
            .rposition(|c| !c.segment.is_release_equivalent())
            .map_or(0, |idx| idx + 1);
        &self.components[..end]
    }

    /// Each qualifier, with the number that directly follows it if any.
    ///
    /// "1.0-rc2"      -> [("rc", Some(2))]
    /// "1.0-beta-2"   -> [("beta", None)]
    pub fn qualifiers(&self) -> impl Iterator<Item = (&Qualifier, Option<&Number>)> {
        self.components.iter().enumerate().filter_map(|(idx, c)| {
            let Segment::Qualifier(q) = &c.segment else {
                return None;
            };
            let index = self.components.get(idx + 1).and_then(|next| {
                match (&next.sep, &next.segment) {
                    (Separator::None, Segment::Number(n)) => Some(n),
                    _ => None,
                }
            });
            Some((q, index))
        })
    }

    pub fn is_snapshot(&self) -> bool {
        self.qualifiers().any(|(q, _)| q.rank() == Rank::Snapshot)
    }

    /// True when only numbers are significant: 1.2, 1.2.0.Final, 3-GA
    pub fn is_release(&self) -> bool {
        self.significant().iter().all(|c| matches!(c.segment, Segment::Number(_)))
    }
}

pub fn parse(text: &str) -> VersionSpec {

    let mut components: Vec<Component> = Vec::new();
    let mut sep = Separator::None;

    for piece in scan::pieces(text) {
        let segment = match piece {
            Piece::Seps(run) => {
                sep = Separator::from_run(run);
                continue;
            }
            Piece::Digits(digits) => {
                if sep == Separator::None {
                    if let Some(Component{ segment: Segment::Qualifier(q), .. }) = components.last_mut() {
                        q.indexed();
                    }
                }
                Segment::Number(Number::new(digits))
            }
            Piece::Text(word) => Segment::Qualifier(Qualifier::new(word)),
        };

        // leading separators are dropped
        if components.is_empty() {
            sep = Separator::None;
        }

        components.push(Component { sep, segment });
        sep = Separator::None;
    }

    if components.is_empty() {
        components.push(Component {
            sep: Separator::None,
            segment: Segment::Qualifier(Qualifier::new("")),
        });
    }

    let spec = VersionSpec {
        original: text.to_string(),
        components,
    };

    tracing::trace!(original = text, rendered = %spec, "parsed version");

    spec
}

fn eq_to_none(v: std::cmp::Ordering) -> Option<std::cmp::Ordering> {
    if matches!(v, std::cmp::Ordering::Equal) {
        return None;
    }
    Some(v)
}

pub fn compare(v1: &VersionSpec, v2: &VersionSpec) -> std::cmp::Ordering {

    let parts1 = v1.significant().iter().map(|c| Some(&c.segment));
    let parts2 = v2.significant().iter().map(|c| Some(&c.segment));

    let max_count = std::cmp::max(parts1.len(), parts2.len());

    let parts1 = parts1.chain(std::iter::repeat(None)).take(max_count);
    let parts2 = parts2.chain(std::iter::repeat(None)).take(max_count);

    for (part1, part2) in std::iter::zip(parts1, parts2) {

        let ord = match (part1, part2) {
            (Some(part1), Some(part2)) => part1.cmp(part2),

            // ran out of segments, continue as zero
            (None, Some(Segment::Number(n))) => {
                if n.is_zero() { std::cmp::Ordering::Equal } else { std::cmp::Ordering::Less }
            }
            (Some(Segment::Number(n)), None) => {
                if n.is_zero() { std::cmp::Ordering::Equal } else { std::cmp::Ordering::Greater }
            }

            // zero is greater than any qualifier
            (None, Some(Segment::Qualifier(_))) => std::cmp::Ordering::Greater,
            (Some(Segment::Qualifier(_)), None) => std::cmp::Ordering::Less,

            (None, None) => std::cmp::Ordering::Equal,
        };

        if let Some(ret) = eq_to_none(ord) {
            return ret;
        }
    }

    std::cmp::Ordering::Equal
}

pub fn render(v: &VersionSpec) -> String {
    v.to_string()
}

/// Stable sort, ascending. Equal versions keep their relative order.
pub fn sort_versions(versions: &mut [VersionSpec]) {
    versions.sort_by(compare);
}

/// Stable sort, descending. Equal versions keep their relative order.
pub fn sort_versions_descending(versions: &mut [VersionSpec]) {
    versions.sort_by(|v1, v2| compare(v2, v1));
}

impl PartialEq for VersionSpec {
    fn eq(&self, other: &Self) -> bool {
        matches!(compare(self, other), std::cmp::Ordering::Equal)
    }
}
impl Eq for VersionSpec {}
impl PartialOrd for VersionSpec {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for VersionSpec {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        compare(self, other)
    }
}

impl std::fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.components {
            f.write_str(c.sep.as_str())?;
            write!(f, "{}", c.segment)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for VersionSpec {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

impl From<&str> for VersionSpec {
    fn from(s: &str) -> Self {
        parse(s)
    }
}

// ---/VersionSpec ---------------------------------------------------
