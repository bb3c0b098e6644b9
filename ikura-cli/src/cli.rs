//! Command-line interface orchestration for ikura.
//!
//! Offers a `demo` command that prints one structure of every kind, plus one
//! command per generator with explicit counts, bounds, and an optional seed
//! for reproducible output.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use ikura_core::{
    BinaryTree, CandidateSet, Domain, GenError, Graph, Matrix, Permutation, PointSet,
    RandomString, Range, Tree, UniqueCollection, pick_one, source,
};
use rand::Rng;
use thiserror::Error;

use crate::render;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "ikura", about = "Generate random combinatorial structures.")]
pub struct Cli {
    /// Seed for reproducible output; defaults to operating-system entropy.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print one structure of every kind the library generates.
    Demo,
    /// Generate a random ordering of a contiguous integer range.
    Permutation(PermutationArgs),
    /// Generate pairwise-distinct integers from an inclusive range.
    Unique(UniqueArgs),
    /// Generate a random tree, optionally edge-weighted.
    Tree(TreeArgs),
    /// Generate a random binary tree, optionally edge-weighted.
    BinaryTree(TreeArgs),
    /// Generate a random simple graph with an exact edge count.
    Graph(GraphArgs),
    /// Generate a random integer matrix.
    Matrix(MatrixArgs),
    /// Generate a random string from a character range or alphabet.
    Text(TextArgs),
    /// Generate random coordinate pairs.
    Points(PointsArgs),
}

/// Options accepted by the `permutation` command.
#[derive(Debug, Args, Clone)]
pub struct PermutationArgs {
    /// Number of values to permute.
    pub n: usize,

    /// First value of the contiguous range.
    #[arg(long, default_value_t = 1)]
    pub base: i64,
}

/// Options accepted by the `unique` command.
#[derive(Debug, Args, Clone)]
pub struct UniqueArgs {
    /// Number of distinct values to draw.
    pub n: usize,

    /// Inclusive lower bound of the value range.
    #[arg(long)]
    pub lo: i64,

    /// Inclusive upper bound of the value range.
    #[arg(long)]
    pub hi: i64,
}

/// Options accepted by the `tree` and `binary-tree` commands.
#[derive(Debug, Args, Clone)]
pub struct TreeArgs {
    /// Number of nodes.
    pub n: usize,

    /// Inclusive lower bound for edge weights; requires `--weight-max`.
    #[arg(long)]
    pub weight_min: Option<i64>,

    /// Inclusive upper bound for edge weights; requires `--weight-min`.
    #[arg(long)]
    pub weight_max: Option<i64>,
}

/// Options accepted by the `graph` command.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Number of nodes.
    pub n: usize,

    /// Exact number of edges.
    pub m: usize,

    /// Inclusive lower bound for edge weights; requires `--weight-max`.
    #[arg(long)]
    pub weight_min: Option<i64>,

    /// Inclusive upper bound for edge weights; requires `--weight-min`.
    #[arg(long)]
    pub weight_max: Option<i64>,
}

/// Options accepted by the `matrix` command.
#[derive(Debug, Args, Clone)]
pub struct MatrixArgs {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Inclusive lower bound of the cell value range.
    #[arg(long)]
    pub lo: i64,

    /// Inclusive upper bound of the cell value range.
    #[arg(long)]
    pub hi: i64,
}

/// Options accepted by the `text` command.
#[derive(Debug, Args, Clone)]
pub struct TextArgs {
    /// Number of characters to draw.
    pub len: usize,

    /// Inclusive lower character bound, ignored when `--alphabet` is given.
    #[arg(long, default_value_t = 'a')]
    pub lo: char,

    /// Inclusive upper character bound, ignored when `--alphabet` is given.
    #[arg(long, default_value_t = 'z')]
    pub hi: char,

    /// Explicit alphabet; repeated characters raise their frequency.
    #[arg(long)]
    pub alphabet: Option<String>,
}

/// Options accepted by the `points` command.
#[derive(Debug, Args, Clone)]
pub struct PointsArgs {
    /// Number of coordinate pairs.
    pub n: usize,

    /// Inclusive lower bound for both axes.
    #[arg(long)]
    pub lo: i64,

    /// Inclusive upper bound for both axes.
    #[arg(long)]
    pub hi: i64,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Only one of the two weight bounds was supplied.
    #[error("--weight-min and --weight-max must be supplied together")]
    WeightBoundsIncomplete,
    /// Structure generation failed.
    #[error(transparent)]
    Core(#[from] GenError),
    /// Writing rendered output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Returns the stable core error code when generation failed.
    #[must_use]
    pub const fn core_code(&self) -> Option<ikura_core::GenErrorCode> {
        match self {
            Self::Core(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Executes the CLI command represented by `cli`, writing rendered
/// structures to `writer`.
///
/// # Errors
/// Returns [`CliError`] when argument validation, generation, or rendering
/// fails.
///
/// # Examples
/// ```
/// use ikura_cli::cli::{Cli, Command, PermutationArgs, run_cli};
///
/// let cli = Cli {
///     seed: Some(42),
///     command: Command::Permutation(PermutationArgs { n: 5, base: 1 }),
/// };
/// let mut buffer = Vec::new();
/// run_cli(cli, &mut buffer).expect("permutation generation cannot fail");
/// assert_eq!(String::from_utf8(buffer).expect("output is UTF-8").lines().count(), 1);
/// ```
pub fn run_cli(cli: Cli, mut writer: impl Write) -> Result<(), CliError> {
    let mut rng = cli.seed.map_or_else(source::from_entropy, source::seeded);
    match cli.command {
        Command::Demo => run_demo(&mut rng, &mut writer),
        Command::Permutation(args) => {
            let perm = Permutation::generate(args.n, args.base, &mut rng)?;
            Ok(render::render_permutation(&perm, writer)?)
        }
        Command::Unique(args) => {
            let domain = Domain::from(Range::new(args.lo, args.hi)?);
            let sample = UniqueCollection::generate(args.n, &domain, &mut rng)?;
            Ok(render::render_unique(&sample, writer)?)
        }
        Command::Tree(args) => {
            let weights = weight_range(args.weight_min, args.weight_max)?;
            let tree = Tree::generate(args.n, weights, &mut rng)?;
            Ok(render::render_tree(&tree, writer)?)
        }
        Command::BinaryTree(args) => {
            let weights = weight_range(args.weight_min, args.weight_max)?;
            let tree = BinaryTree::generate(args.n, weights, &mut rng)?;
            Ok(render::render_binary_tree(&tree, writer)?)
        }
        Command::Graph(args) => {
            let weights = weight_range(args.weight_min, args.weight_max)?;
            let graph = Graph::generate(args.n, args.m, weights, &mut rng)?;
            Ok(render::render_graph(&graph, writer)?)
        }
        Command::Matrix(args) => {
            let domain = Domain::from(Range::new(args.lo, args.hi)?);
            let matrix = Matrix::generate(args.rows, args.cols, &domain, &mut rng);
            Ok(render::render_matrix(&matrix, writer)?)
        }
        Command::Text(args) => {
            let domain = text_domain(&args)?;
            let word = RandomString::generate(args.len, &domain, &mut rng);
            Ok(writeln!(writer, "{word}")?)
        }
        Command::Points(args) => {
            let bounds = Range::new(args.lo, args.hi)?;
            let points = PointSet::in_square(args.n, &bounds, &mut rng);
            Ok(render::render_points(&points, writer)?)
        }
    }
}

/// Builds the optional weight range, insisting that both bounds arrive
/// together.
fn weight_range(min: Option<i64>, max: Option<i64>) -> Result<Option<Range<i64>>, CliError> {
    match (min, max) {
        (None, None) => Ok(None),
        (Some(lo), Some(hi)) => Ok(Some(Range::new(lo, hi)?)),
        _ => Err(CliError::WeightBoundsIncomplete),
    }
}

/// Builds the character domain for the `text` command.
fn text_domain(args: &TextArgs) -> Result<Domain<char>, CliError> {
    match &args.alphabet {
        Some(alphabet) => Ok(CandidateSet::new(alphabet.chars().collect())?.into()),
        None => Ok(Range::new(args.lo, args.hi)?.into()),
    }
}

/// Prints one structure of every kind, mirroring the original library tour.
fn run_demo<R: Rng>(rng: &mut R, writer: &mut impl Write) -> Result<(), CliError> {
    let percent = Range::new(1_i64, 100)?;
    let unit = Range::new(0.0_f64, 1.0)?;
    let lowercase = Range::new('a', 'z')?;

    writeln!(writer, "Random integer: {}", percent.sample(rng))?;
    writeln!(writer, "Random float: {}", unit.sample(rng))?;
    writeln!(writer, "Random char: {}", lowercase.sample(rng))?;
    writeln!(writer)?;

    let fruits = ["apple", "banana", "orange", "grape", "kiwi"];
    let fruit = pick_one(&fruits, rng).unwrap_or(&"apple");
    writeln!(writer, "Random fruit: {fruit}")?;
    let vowels: Vec<char> = "aeiou".chars().collect();
    let vowel = pick_one(&vowels, rng).copied().unwrap_or('a');
    writeln!(writer, "Random vowel: {vowel}")?;
    writeln!(writer)?;

    writeln!(writer, "Random vector of integers:")?;
    let ints = Domain::from(percent);
    render::render_values((0..10).map(|_| ints.pick(rng)), &mut *writer)?;

    writeln!(writer, "Random vector of selected characters:")?;
    let letters = Domain::from(CandidateSet::new(vec!['A', 'B', 'C', 'D', 'E'])?);
    render::render_values((0..5).map(|_| letters.pick(rng)), &mut *writer)?;
    writeln!(writer)?;

    writeln!(writer, "Standard permutation (1 to 5):")?;
    render::render_permutation(&Permutation::generate(5, 1, rng)?, &mut *writer)?;
    writeln!(writer, "Permutation starting from 0 (0 to 4):")?;
    render::render_permutation(&Permutation::generate(5, 0, rng)?, &mut *writer)?;
    writeln!(writer)?;

    writeln!(writer, "Unique integers:")?;
    let small = Domain::from(Range::new(1_i64, 10)?);
    render::render_unique(&UniqueCollection::generate(5, &small, rng)?, &mut *writer)?;
    writeln!(writer, "Unique characters:")?;
    let tail = Domain::from(Range::new('X', 'Z')?);
    render::render_unique(&UniqueCollection::generate(3, &tail, rng)?, &mut *writer)?;
    writeln!(writer)?;

    let uppercase = Domain::from(Range::new('A', 'Z')?);
    writeln!(
        writer,
        "Random uppercase string: {}",
        RandomString::generate(8, &uppercase, rng)
    )?;
    let alphanumeric = Domain::from(CandidateSet::new(
        "abcdefghijklmnopqrstuvwxyz0123456789".chars().collect(),
    )?);
    writeln!(
        writer,
        "Random string from character set: {}",
        RandomString::generate(10, &alphanumeric, rng)
    )?;
    writeln!(writer)?;

    writeln!(writer, "Random integer matrix:")?;
    let cells = Domain::from(Range::new(1_i64, 10)?);
    render::render_matrix(&Matrix::generate(3, 4, &cells, rng), &mut *writer)?;
    writeln!(writer)?;

    writeln!(writer, "Random character matrix:")?;
    let board = Domain::from(CandidateSet::new(vec!['X', 'O', '.'])?);
    render::render_matrix(&Matrix::generate(10, 10, &board, rng), &mut *writer)?;
    writeln!(writer)?;

    writeln!(writer, "Random float matrix:")?;
    let fractions = Domain::from(Range::new(0.1_f64, 1.0)?);
    render::render_matrix(&Matrix::generate(2, 2, &fractions, rng), &mut *writer)?;
    writeln!(writer)?;

    writeln!(writer, "Weighted tree:")?;
    render::render_tree(&Tree::generate(5, Some(Range::new(1_i64, 10)?), rng)?, &mut *writer)?;
    writeln!(writer)?;
    writeln!(writer, "Unweighted tree:")?;
    render::render_tree(&Tree::<i64>::generate(4, None, rng)?, &mut *writer)?;
    writeln!(writer)?;

    writeln!(writer, "Weighted binary tree:")?;
    render::render_binary_tree(
        &BinaryTree::generate(5, Some(Range::new(0.1_f64, 1.0)?), rng)?,
        &mut *writer,
    )?;
    writeln!(writer)?;
    writeln!(writer, "Unweighted binary tree:")?;
    render::render_binary_tree(&BinaryTree::<i64>::generate(4, None, rng)?, &mut *writer)?;
    writeln!(writer)?;

    writeln!(writer, "Weighted graph:")?;
    render::render_graph(
        &Graph::generate(6, 10, Some(Range::new(1_i64, 100)?), rng)?,
        &mut *writer,
    )?;
    writeln!(writer)?;
    writeln!(writer, "Unweighted graph:")?;
    render::render_graph(&Graph::<i64>::generate(5, 7, None, rng)?, &mut *writer)?;
    writeln!(writer)?;

    writeln!(writer, "Random co-ordinates:")?;
    render::render_points(&PointSet::in_square(5, &Range::new(1, 10)?, rng), &mut *writer)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser as _;
    use ikura_core::GenErrorCode;
    use rstest::rstest;

    fn run(cli: Cli) -> Result<String, CliError> {
        let mut buffer = Vec::new();
        run_cli(cli, &mut buffer)?;
        Ok(String::from_utf8(buffer).expect("output is UTF-8"))
    }

    #[test]
    fn demo_is_reproducible_under_a_fixed_seed() {
        ikura_test_support::tracing_setup::init();
        let first = run(Cli {
            seed: Some(42),
            command: Command::Demo,
        })
        .expect("demo must succeed");
        let second = run(Cli {
            seed: Some(42),
            command: Command::Demo,
        })
        .expect("demo must succeed");
        assert_eq!(first, second);
        assert!(first.contains("Random integer:"));
        assert!(first.contains("Weighted graph:"));
        assert!(first.contains("Random co-ordinates:"));
    }

    #[test]
    fn permutation_command_prints_a_rearrangement() {
        let text = run(Cli {
            seed: Some(7),
            command: Command::Permutation(PermutationArgs { n: 5, base: 1 }),
        })
        .expect("permutation must succeed");
        let mut values: Vec<i64> = text
            .split_whitespace()
            .map(|token| token.parse().expect("tokens are integers"))
            .collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn graph_command_prints_header_and_edges() {
        let text = run(Cli {
            seed: Some(3),
            command: Command::Graph(GraphArgs {
                n: 5,
                m: 7,
                weight_min: Some(1),
                weight_max: Some(100),
            }),
        })
        .expect("graph must succeed");
        assert!(text.starts_with("graph with 5 nodes, 7 edges\n"));
        assert_eq!(text.lines().count(), 8);
        assert!(text.contains("(weight "));
    }

    #[test]
    fn graph_command_rejects_infeasible_edge_counts() {
        let err = run(Cli {
            seed: Some(0),
            command: Command::Graph(GraphArgs {
                n: 4,
                m: 7,
                weight_min: None,
                weight_max: None,
            }),
        })
        .expect_err("7 edges never fit on 4 nodes");
        assert_eq!(err.core_code(), Some(GenErrorCode::TooManyEdges));
    }

    #[rstest]
    #[case(Some(1), None)]
    #[case(None, Some(9))]
    fn lone_weight_bounds_are_rejected(#[case] min: Option<i64>, #[case] max: Option<i64>) {
        let err = run(Cli {
            seed: Some(0),
            command: Command::Tree(TreeArgs {
                n: 4,
                weight_min: min,
                weight_max: max,
            }),
        })
        .expect_err("a lone weight bound must fail");
        assert!(matches!(err, CliError::WeightBoundsIncomplete));
    }

    #[test]
    fn unique_command_rejects_exhausted_domains() {
        let err = run(Cli {
            seed: Some(0),
            command: Command::Unique(UniqueArgs { n: 5, lo: 1, hi: 4 }),
        })
        .expect_err("4 distinct values cannot fill 5 slots");
        assert_eq!(err.core_code(), Some(GenErrorCode::DomainExhausted));
    }

    #[test]
    fn text_command_prefers_the_alphabet() {
        let text = run(Cli {
            seed: Some(11),
            command: Command::Text(TextArgs {
                len: 12,
                lo: 'a',
                hi: 'z',
                alphabet: Some("01".to_owned()),
            }),
        })
        .expect("text must succeed");
        assert!(text.trim().chars().all(|c| c == '0' || c == '1'));
        assert_eq!(text.trim().len(), 12);
    }

    #[test]
    fn clap_parses_a_graph_invocation() {
        let cli = Cli::parse_from(["ikura", "graph", "6", "10", "--weight-min", "1", "--weight-max", "100", "--seed", "5"]);
        assert_eq!(cli.seed, Some(5));
        assert!(matches!(
            cli.command,
            Command::Graph(GraphArgs { n: 6, m: 10, .. })
        ));
    }

    #[test]
    fn clap_rejects_missing_counts() {
        let result = Cli::try_parse_from(["ikura", "permutation"]);
        assert!(result.is_err());
    }
}
