use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use hybrid_trie::{dot, words, HybridTrie, UniquePriorities};

/// Load words from a text file into a hybrid trie and query it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text file; words are separated by whitespace
    input: PathBuf,

    /// Insert with treap balancing instead of plain insertion
    #[arg(long)]
    balanced: bool,

    /// Seed for balancing priorities (default: OS entropy)
    #[arg(long, requires = "balanced")]
    seed: Option<u64>,

    /// Info output
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Debug output
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print structural statistics
    Stats,
    /// Print stored words in order
    Words,
    /// Report whether each word is stored
    Search { words: Vec<String> },
    /// Count stored words starting with each prefix
    Prefix { prefixes: Vec<String> },
    /// Remove words, then print statistics
    Remove { words: Vec<String> },
    /// Write a Graphviz rendering of the trie
    Dot {
        #[arg(long, short = 'o')]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut trie = load(&args)?;
    run(&mut trie, args.command)
}

fn load(args: &Args) -> Result<HybridTrie> {
    let input = words::read_words_from_path(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let mut trie = HybridTrie::new();
    let inserted = if args.balanced {
        let mut priorities = match args.seed {
            Some(seed) => UniquePriorities::seeded(seed),
            None => UniquePriorities::new(),
        };
        trie.insert_all_balanced(&input, &mut priorities)
    } else {
        trie.insert_all(&input)
    };
    inserted.with_context(|| format!("loading words from {}", args.input.display()))?;

    info!(
        "loaded {} words ({} distinct) from {}",
        input.len(),
        trie.word_count(),
        args.input.display()
    );
    Ok(trie)
}

fn run(trie: &mut HybridTrie, command: Command) -> Result<()> {
    match command {
        Command::Stats => print_stats(trie),
        Command::Words => {
            for word in trie.iter() {
                println!("{word}");
            }
        }
        Command::Search { words } => {
            for word in words {
                println!("{word}\t{}", trie.contains(&word)?);
            }
        }
        Command::Prefix { prefixes } => {
            for prefix in prefixes {
                println!("{prefix}\t{}", trie.prefix_count(&prefix)?);
            }
        }
        Command::Remove { words } => {
            for word in words {
                let removed = trie.remove(&word)?;
                println!("{word}\t{}", if removed { "removed" } else { "absent" });
            }
            print_stats(trie);
        }
        Command::Dot { output } => {
            dot::write_dot_file(trie, &output)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("open it with: xdot {}", output.display());
        }
    }
    Ok(())
}

fn print_stats(trie: &HybridTrie) {
    let stats = trie.stats();
    println!("words:          {}", stats.words);
    println!("nodes:          {}", stats.nodes);
    println!("null links:     {}", stats.null_links);
    println!("leaves:         {}", stats.leaves);
    println!("height:         {}", stats.height);
    println!("avg leaf depth: {:.3}", stats.average_leaf_depth());
}
