use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use strix::AlphabetPreset;
use strix::index::z_function::{
    find_occurrences, merge_overlapping, prefix_decomposition, string_from_prefix_function,
    z_function,
};
use strix::index::{
    AhoCorasickBuilder, GeneralizedSuffixTree, MaskMatcher, SuffixArrayBuilder, SuffixAutomaton,
    WildcardMask, kth_common_substring,
};
use strix::output::Printer;
use strix::utils::{Input, ToolkitConfig, ensure_absent, get_config_path};
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "strix")]
#[command(about = "String indexing toolkit: Z-function, suffix structures and Aho–Corasick")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read the text from a file (memory-mapped) instead of an argument or stdin
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Print results as one JSON object
    #[arg(long, global = true)]
    json: bool,

    /// When to colour plain output
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    color: ColorWhen,

    /// Configuration file (default: config.json in the app data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured alphabet (lowercase, binary, dna, bytes)
    #[arg(short, long, global = true)]
    alphabet: Option<AlphabetPreset>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
    Never,
    Auto,
    Always,
}

#[derive(Subcommand)]
enum Commands {
    /// Z-array of the text
    Z { text: Option<String> },
    /// Start positions of a pattern in the text
    Search {
        pattern: String,
        text: Option<String>,
    },
    /// Suffix array and LCP array
    Sa { text: Option<String> },
    /// Number of distinct substrings
    Distinct { text: Option<String> },
    /// The k-th smallest distinct string occurring in both inputs (arguments only)
    Common {
        /// 1-based rank
        k: u64,
        first: String,
        second: String,
    },
    /// Distinct substring count of every prefix
    Sam { text: Option<String> },
    /// Distinct substrings occurring twice without overlapping
    Repeats { text: Option<String> },
    /// Generalized suffix tree of two strings, each ending in a unique symbol
    /// (arguments only)
    Tree { first: String, second: String },
    /// Window starts matching a mask with single-symbol wildcards
    Mask { mask: String, text: Option<String> },
    /// Whether an infinite string can avoid every pattern
    Safe {
        /// Patterns (read whitespace-separated from the input when omitted)
        patterns: Vec<String>,
    },
    /// Shortest string containing the words in order, glued by maximal overlap
    /// (arguments only)
    Merge { words: Vec<String> },
    /// Split the text into the fewest prefixes of a source string
    Split {
        source: String,
        text: Option<String>,
    },
    /// Smallest string over the alphabet with the given prefix function
    /// (arguments only)
    Restore { values: Vec<usize> },
    /// Show the effective configuration
    Config {
        /// Write it to the app data directory
        #[arg(long)]
        save: bool,
    },
}

impl Commands {
    /// Name of a subcommand that never reads the input text
    fn arguments_only(&self) -> Option<&'static str> {
        match self {
            Commands::Common { .. } => Some("common"),
            Commands::Tree { .. } => Some("tree"),
            Commands::Merge { .. } => Some("merge"),
            Commands::Restore { .. } => Some("restore"),
            Commands::Config { .. } => Some("config"),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ToolkitConfig::load_from(path)?,
        None => ToolkitConfig::load().unwrap_or_else(|e| {
            eprintln!("strix: {:#}; using default configuration", e);
            ToolkitConfig::default()
        }),
    };
    if let Some(alphabet) = cli.alphabet {
        config.alphabet = alphabet;
    }

    let color = match cli.color {
        ColorWhen::Never => ColorChoice::Never,
        ColorWhen::Always => ColorChoice::Always,
        ColorWhen::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
        ColorWhen::Auto => ColorChoice::Never,
    };

    let mut out = Printer::new(color, cli.json);
    run(cli.command, &config, cli.config.as_deref(), cli.file.as_deref(), &mut out)?;
    out.finish()?;

    Ok(())
}

fn run(
    command: Commands,
    config: &ToolkitConfig,
    config_path: Option<&Path>,
    file: Option<&Path>,
    out: &mut Printer,
) -> Result<()> {
    let load = |text: Option<String>| Input::load(text.as_deref(), file);
    if let (Some(name), Some(_)) = (command.arguments_only(), file) {
        bail!("`{}` takes its input as arguments and does not accept --file", name);
    }

    match command {
        Commands::Z { text } => {
            let text = load(text)?;
            out.list("z", &z_function(&text[..]))?;
        }
        Commands::Search { pattern, text } => {
            let text = load(text)?;
            let separator = config.separator_byte()?;
            ensure_absent(separator, &[pattern.as_bytes(), &text[..]])?;
            out.list("matches", &find_occurrences(&text, pattern.as_bytes(), separator))?;
        }
        Commands::Sa { text } => {
            let text = load(text)?;
            let sa = SuffixArrayBuilder::new(config.suffix_array_config()).build(&text[..]);
            out.list("sa", sa.as_slice())?;
            out.list("lcp", &sa.lcp())?;
        }
        Commands::Distinct { text } => {
            let text = load(text)?;
            let sa = SuffixArrayBuilder::new(config.suffix_array_config()).build(&text[..]);
            out.value("distinct", &sa.distinct_substrings())?;
        }
        Commands::Common { k, first, second } => {
            let builder = SuffixArrayBuilder::new(config.suffix_array_config());
            let common = kth_common_substring(&builder, first.as_bytes(), second.as_bytes(), k);
            out.bytes("common", common.as_deref())?;
        }
        Commands::Sam { text } => {
            let text = load(text)?;
            out.list("counts", &SuffixAutomaton::substring_counts(&text))?;
        }
        Commands::Repeats { text } => {
            let text = load(text)?;
            let automaton = SuffixAutomaton::from_text(&text);
            out.value("repeats", &automaton.non_overlapping_repeats())?;
        }
        Commands::Tree { first, second } => {
            let tree = GeneralizedSuffixTree::new(first.as_bytes(), second.as_bytes());
            out.value("nodes", &tree.node_count())?;
            out.edges("edges", &tree.edges())?;
        }
        Commands::Mask { mask, text } => {
            let text = load(text)?;
            let mask = WildcardMask::parse(mask.as_bytes(), config.wildcard_byte()?);
            let mut matcher = MaskMatcher::new(&mask, config.alphabet.alphabet())
                .context("Invalid mask")?;
            out.list("matches", &matcher.find(&text))?;
        }
        Commands::Safe { patterns } => {
            let patterns: Vec<Vec<u8>> = if patterns.is_empty() {
                load(None)?.words().map(<[u8]>::to_vec).collect()
            } else {
                patterns.into_iter().map(String::into_bytes).collect()
            };

            let mut builder = AhoCorasickBuilder::new(config.alphabet.alphabet());
            for pattern in &patterns {
                builder.add_pattern(pattern).with_context(|| {
                    format!("Invalid pattern {:?}", String::from_utf8_lossy(pattern))
                })?;
            }
            out.answer("safe", builder.build().has_safe_cycle())?;
        }
        Commands::Merge { words } => {
            out.bytes("merged", Some(merge_overlapping(&words).as_slice()))?;
        }
        Commands::Split { source, text } => {
            let text = load(text)?;
            match prefix_decomposition(source.as_bytes(), &text) {
                Some(pieces) => out.list("pieces", &pieces)?,
                None => out.answer("possible", false)?,
            }
        }
        Commands::Restore { values } => {
            let restored = string_from_prefix_function(&values, &config.alphabet.alphabet());
            out.bytes("string", restored.as_deref())?;
        }
        Commands::Config { save } => {
            let path = match config_path {
                Some(path) => path.to_path_buf(),
                None if save => config.save()?,
                None => get_config_path()?,
            };
            out.value("path", &path.display().to_string())?;
            out.structured("config", config)?;
        }
    }

    Ok(())
}
