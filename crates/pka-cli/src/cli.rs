use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "pkastore - Inspect the parameter tables and hydrogen-bond interaction matrices of the empirical pKa model.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Load the parameter set from a TOML file instead of the built-in one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub params: Option<PathBuf>,

    /// Fill side-chain pairs authored in neither direction with a zero record
    /// instead of rejecting the parameter set.
    #[arg(long, global = true)]
    pub fill_gaps: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the reduced category of a residue name, or the whole mapping.
    Category(KeyArgs),
    /// Show the formal charge of a residue label, or the whole charge table.
    Charge(KeyArgs),
    /// Show the model pKa of a residue label, or the whole pKa table.
    Pka(KeyArgs),
    /// Show the local desolvation radius of a residue label, or the whole table.
    Radius(KeyArgs),
    /// Show the relative van der Waals volume of an atom class (C, C4, N, O, S).
    Volume(KeyArgs),
    /// Show the parameters of a Coulomb model ('Linear', 'Coulomb').
    Coulomb(KeyArgs),
    /// Show the parameters of a desolvation model ('propka2', 'ContactModel', ...).
    Desolvation(KeyArgs),
    /// Show hydrogen-bond parameters for the 'back-bone' or 'side-chain' context.
    Hbond(HbondArgs),
    /// Classify the interaction between two residue categories, or print the matrix.
    Interaction(PairArgs),
    /// Write the completed side-chain hydrogen-bond matrix as CSV.
    Export(ExportArgs),
}

/// A single optional lookup key. Without it the whole table is printed.
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Lookup key, e.g. 'HIS', 'N+' or 'Coulomb'.
    #[arg(value_name = "KEY")]
    pub key: Option<String>,
}

/// Arguments for the `hbond` subcommand.
#[derive(Args, Debug)]
pub struct HbondArgs {
    /// Interaction context: 'back-bone' or 'side-chain'.
    #[arg(required = true, value_name = "CONTEXT")]
    pub context: String,

    #[command(flatten)]
    pub pair: PairArgs,
}

#[derive(Args, Debug)]
pub struct PairArgs {
    /// First residue category, e.g. 'TYR'.
    #[arg(value_name = "CATEGORY")]
    pub first: Option<String>,

    /// Second residue category, e.g. 'HIS'.
    #[arg(value_name = "CATEGORY", requires = "first")]
    pub second: Option<String>,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path of the CSV file to write. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pkastore", "charge", "HIS", "-vv", "--fill-gaps"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.fill_gaps);
        match cli.command {
            Commands::Charge(args) => assert_eq!(args.key.as_deref(), Some("HIS")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn author_comes_from_package_metadata() {
        use clap::CommandFactory;
        let command = Cli::command();
        assert_eq!(command.get_author(), Some(env!("CARGO_PKG_AUTHORS")));
        assert_eq!(command.get_author(), Some("The pkastore Developers"));
    }

    #[test]
    fn key_is_optional() {
        let cli = Cli::try_parse_from(["pkastore", "pka"]).unwrap();
        assert!(matches!(cli.command, Commands::Pka(KeyArgs { key: None })));
    }

    #[test]
    fn hbond_requires_context() {
        assert!(Cli::try_parse_from(["pkastore", "hbond"]).is_err());
        let cli = Cli::try_parse_from(["pkastore", "hbond", "side-chain", "TYR", "HIS"]).unwrap();
        match cli.command {
            Commands::Hbond(args) => {
                assert_eq!(args.context, "side-chain");
                assert_eq!(args.pair.first.as_deref(), Some("TYR"));
                assert_eq!(args.pair.second.as_deref(), Some("HIS"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["pkastore", "-q", "-v", "pka"]).is_err());
    }

    #[test]
    fn params_path_is_global() {
        let cli = Cli::try_parse_from(["pkastore", "export", "--params", "custom.toml"]).unwrap();
        assert_eq!(cli.params, Some(PathBuf::from("custom.toml")));
    }
}
