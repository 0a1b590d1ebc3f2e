use anyhow::{Context, Result};
use clap::Parser;
use dna_hash::cli::opts::{CountingArgs, TokenizeArgs, TokenizeMode};
use dna_hash::{Canonical, DnaHash, Kmer, Tokenizer};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::time::Instant;

/// Command-line options for the DNA sequence counting demo
#[derive(Parser)]
#[command(
    name = "dna_hash_cli",
    about = "Count DNA sequences (one per line) with a singleton-elided counting store",
    long_about = "Count DNA sequences with a singleton-elided counting store.

EXAMPLES:
    // Count whole lines as-is
    $ dna_hash_cli --input reads.txt --top 10

    // Count canonical 21-mers extracted from each line
    $ dna_hash_cli --input reads.txt --mode canonical --kmer-size 21
    ",
    version = "0.1.0"
)]
struct Cli {
    /// Newline-delimited sequences to count [path]
    #[clap(short = 'i', long, value_parser, required = true, help_heading = "Core")]
    pub input: PathBuf,

    /// Print the k highest-count sequences [integer]
    #[clap(long, default_value = "10", help_heading = "Core")]
    pub top: u64,

    #[clap(flatten)]
    pub counting: CountingArgs,

    #[clap(flatten)]
    pub tokenize: TokenizeArgs,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let start_time = Instant::now();
    let opt = Cli::parse();

    let file = File::open(&opt.input).context(format!("opening input file {:?}", opt.input))?;
    let reader = BufReader::new(file);

    let tokenizer: Option<Box<dyn Tokenizer>> = match opt.tokenize.mode {
        TokenizeMode::Whole => None,
        TokenizeMode::Kmer => Some(Box::new(Kmer::new(
            opt.tokenize.kmer_size,
            opt.tokenize.skip_invalid,
        ))),
        TokenizeMode::Canonical => Some(Box::new(Canonical::new(Box::new(Kmer::new(
            opt.tokenize.kmer_size,
            opt.tokenize.skip_invalid,
        ))))),
    };

    let mut hash = DnaHash::new(
        opt.counting.max_fp_rate,
        opt.counting.num_hashes,
        opt.counting.layer_size,
    );

    println!("Start: Counting sequences from {:?}", opt.input);
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("       {spinner} {msg}")
            .unwrap(),
    );

    let mut lines_seen: u64 = 0;
    for line in reader.lines() {
        let line = line.context("reading input line")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match &tokenizer {
            None => hash.increment(line).context("incrementing sequence")?,
            Some(tok) => {
                for token in tok.tokenize(line) {
                    match token {
                        Ok(t) => hash.increment(&t).context("incrementing token")?,
                        Err(e) => return Err(e).context("tokenizing input line"),
                    }
                }
            }
        }

        lines_seen += 1;
        if lines_seen % 10_000 == 0 {
            pb.set_message(format!("{lines_seen} lines processed"));
            pb.tick();
        }
    }
    pb.finish_with_message(format!("{lines_seen} lines processed"));

    println!("num_sequences:        {}", hash.num_sequences());
    println!("num_unique_sequences: {}", hash.num_unique_sequences());
    println!("num_singletons:       {}", hash.num_singletons());
    println!("num_non_singletons:   {}", hash.num_non_singletons());

    if let Ok(max) = hash.max() {
        println!("max:                  {max}");
    }
    if let Ok(argmax) = hash.argmax() {
        println!("argmax:               {argmax}");
    }

    if opt.top > 0 {
        println!("\nTop {} sequences:", opt.top);
        for (seq, count) in hash.top(opt.top) {
            println!("  {seq}\t{count}");
        }
    }

    let elapsed = start_time.elapsed();
    println!("\nElapsed time: {:.2?}", elapsed);
    Ok(())
}
