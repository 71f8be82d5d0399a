// qualifier rank table
//
// unknown < alpha < beta < milestone < rc < snapshot < release
//
// - names match case-insensitively
// - "a", "b" and "m" are only aliases when a number follows directly: 1.0a1, 2.0-M3
// - equal ranks compare by canonical name: a1 == alpha1, cr == rc, final < ga < release
// - unknown qualifiers compare by their lowercased text
// - release qualifiers (ga, final, release) are equivalent to no qualifier at all
//   when they trail a version: 1.0.Final == 1.0

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Unknown,
    Alpha,
    Beta,
    Milestone,
    ReleaseCandidate,
    Snapshot,
    Release,
}

// (name, rank, canonical name)
static QUALIFIER_RANKS: &[(&str, Rank, &str)] = &[
    ("alpha",     Rank::Alpha,            "alpha"),
    ("beta",      Rank::Beta,             "beta"),
    ("milestone", Rank::Milestone,        "milestone"),
    ("rc",        Rank::ReleaseCandidate, "rc"),
    ("cr",        Rank::ReleaseCandidate, "rc"),
    ("snapshot",  Rank::Snapshot,         "snapshot"),
    ("ga",        Rank::Release,          "ga"),
    ("final",     Rank::Release,          "final"),
    ("release",   Rank::Release,          "release"),
];

// only valid when immediately followed by a number
static INDEXED_ALIASES: &[(&str, Rank, &str)] = &[
    ("a", Rank::Alpha,     "alpha"),
    ("b", Rank::Beta,      "beta"),
    ("m", Rank::Milestone, "milestone"),
];

// always rendered with this exact casing
static CANONICAL_CASING: &[&str] = &[
    "SNAPSHOT",
    "Final",
];

fn lookup(table: &[(&str, Rank, &'static str)], text: &str) -> Option<(Rank, &'static str)> {
    table.iter()
        .find(|(name, _, _)| name.eq_ignore_ascii_case(text))
        .map(|(_, rank, canonical)| (*rank, *canonical))
}

/// A non-numeric segment of a version.
#[derive(Debug, Clone)]
pub struct Qualifier {
    text: String,
    // canonical name for known qualifiers, lowercased text otherwise
    key: String,
    rank: Rank,
}

impl Qualifier {

    pub fn new(text: &str) -> Self {
        let (rank, key) = match lookup(QUALIFIER_RANKS, text) {
            Some((rank, canonical)) => (rank, canonical.to_string()),
            None => (Rank::Unknown, text.to_lowercase()),
        };
        Self {
            text: text.to_string(),
            key,
            rank,
        }
    }

    /// Called by the parser when a number directly follows this qualifier.
    pub(crate) fn indexed(&mut self) {
        if self.rank == Rank::Unknown {
            if let Some((rank, canonical)) = lookup(INDEXED_ALIASES, &self.text) {
                self.rank = rank;
                self.key = canonical.to_string();
            }
        }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn is_release(&self) -> bool {
        self.rank == Rank::Release
    }

    /// The text used when rendering, canonical casing for a few well known names.
    pub fn rendered(&self) -> &str {
        CANONICAL_CASING.iter()
            .find(|name| name.eq_ignore_ascii_case(&self.text))
            .copied()
            .unwrap_or(self.text.as_str())
    }
}

impl PartialEq for Qualifier {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.cmp(other), std::cmp::Ordering::Equal)
    }
}
impl Eq for Qualifier {}
impl PartialOrd for Qualifier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Qualifier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
            .then_with(|| self.key.cmp(&other.key))
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn ranks() {
        assert_eq!(Qualifier::new("alpha").rank(), Rank::Alpha);
        assert_eq!(Qualifier::new("BETA").rank(), Rank::Beta);
        assert_eq!(Qualifier::new("Milestone").rank(), Rank::Milestone);
        assert_eq!(Qualifier::new("CR").rank(), Rank::ReleaseCandidate);
        assert_eq!(Qualifier::new("SNAPSHOT").rank(), Rank::Snapshot);
        assert_eq!(Qualifier::new("Final").rank(), Rank::Release);
        assert_eq!(Qualifier::new("jboss").rank(), Rank::Unknown);

        // single letters need an index
        assert_eq!(Qualifier::new("a").rank(), Rank::Unknown);
        let mut q = Qualifier::new("a");
        q.indexed();
        assert_eq!(q.rank(), Rank::Alpha);

        // indexing never changes a known rank
        let mut q = Qualifier::new("rc");
        q.indexed();
        assert_eq!(q.rank(), Rank::ReleaseCandidate);
    }

    #[test]
    fn ordering() {
        let ordered = ["bar", "Foo", "alpha", "beta", "milestone", "rc", "snapshot", "final", "GA", "release"];
        for (i, s1) in ordered.iter().enumerate() {
            for s2 in ordered.iter().skip(i+1) {
                assert!(Qualifier::new(s1) < Qualifier::new(s2), "{s1} < {s2}");
            }
        }

        assert_eq!(Qualifier::new("cr"), Qualifier::new("RC"));
        assert_eq!(Qualifier::new("Final"), Qualifier::new("FINAL"));
        assert_eq!(Qualifier::new("foo"), Qualifier::new("FOO"));

        // same rank, different canonical names
        assert!(Qualifier::new("final") < Qualifier::new("ga"));
        assert!(Qualifier::new("ga") < Qualifier::new("release"));

        // an indexed alias takes the canonical name of what it stands for
        let mut a = Qualifier::new("A");
        a.indexed();
        assert_eq!(a, Qualifier::new("alpha"));
    }

    #[test]
    fn casing() {
        assert_eq!(Qualifier::new("snapshot").rendered(), "SNAPSHOT");
        assert_eq!(Qualifier::new("FINAL").rendered(), "Final");
        assert_eq!(Qualifier::new("Beta").rendered(), "Beta");
        assert_eq!(Qualifier::new("redhat").rendered(), "redhat");
    }
}
