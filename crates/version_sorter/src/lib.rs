use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;
use std::io::Write;
use version_spec::VersionSpec;

pub fn get_cli() -> Command {
    Command::new("version_sorter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort versions")
        .long_about("Take a list of versions, sort them and print the canonical form of each, one per line, in ascending order.\n\
                     Options must come before the versions. Use -- before a version that starts with '-'.")
        .arg(arg!(versions: [version]... "Versions to sort")
            .allow_hyphen_values(true)
        )
        .arg(arg!(--descending "output in descending order"))
}

pub fn main_cli<W: Write>(matches: &clap::ArgMatches, out: W) -> Result<()> {

    let descending = matches.get_flag("descending");

    // every version is parsed before any sorting happens
    let mut versions = matches.get_many::<String>("versions")
        .map(|versions| versions.map(|v| version_spec::parse(v)).collect::<Vec<VersionSpec>>())
        .unwrap_or_default();

    tracing::debug!(count = versions.len(), descending, "sorting versions");

    if descending {
        version_spec::sort_versions_descending(&mut versions);
    } else {
        version_spec::sort_versions(&mut versions);
    }

    let mut out = std::io::BufWriter::new(out);
    for v in &versions {
        tracing::debug!(original = v.original(), "{v}");
        writeln!(out, "{v}").context("failed to write version")?;
    }
    out.flush().context("failed to flush output")?;

    Ok(())
}

#[cfg(test)]
mod test {

    use super::*;

    fn run(args: &[&str]) -> String {
        let args = std::iter::once("version_sorter").chain(args.iter().copied());
        let matches = get_cli().try_get_matches_from(args).unwrap();
        let mut out = Vec::new();
        main_cli(&matches, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn sorts_ascending() {
        let out = run(&["1.0.9", "1.0.10", "1.0-beta", "1.0"]);
        assert_eq!(out, "1.0-beta\n1.0\n1.0.9\n1.0.10\n");
    }

    #[test]
    fn no_versions() {
        assert_eq!(run(&[]), "");
    }

    #[test]
    fn descending() {
        let out = run(&["--descending", "1.0.9", "1.0.10", "1.0-beta", "1.0"]);
        assert_eq!(out, "1.0.10\n1.0.9\n1.0\n1.0-beta\n");
    }

    #[test]
    fn canonical_rendering() {
        let out = run(&["1.0.0.final", "01.2-snapshot", "1..1"]);
        assert_eq!(out, "1.0.0.Final\n1.1\n1.2-SNAPSHOT\n");
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let out = run(&["foo", "2", "FOO", "1.0", "foo", "1"]);
        assert_eq!(out, "foo\nFOO\nfoo\n1.0\n1\n2\n");
    }

    #[test]
    fn hyphen_versions() {
        let out = run(&["--", "-beta", "1.0"]);
        assert_eq!(out, "beta\n1.0\n");

        let out = run(&["1.0", "-2"]);
        assert_eq!(out, "1.0\n2\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn write_failure_is_fatal() {
        let matches = get_cli().try_get_matches_from(["version_sorter", "1.0"]).unwrap();
        assert!(main_cli(&matches, BrokenPipe).is_err());
    }

    #[test]
    fn cli_is_valid() {
        get_cli().debug_assert();
    }
}
