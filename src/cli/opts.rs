use clap::Args;

/// The three constructor knobs of [`crate::DnaHash`], exposed as a
/// composable `clap::Args` block.
#[derive(Debug, Args)]
pub struct CountingArgs {
    /// Maximum false-positive rate of the membership filter [float]
    #[clap(long, default_value = "0.01", help_heading = "Counting")]
    pub max_fp_rate: f64,

    /// Number of hash probes per Bloom filter layer [integer]
    #[clap(long, default_value = "4", help_heading = "Counting")]
    pub num_hashes: u32,

    /// Number of distinct sequences held per filter layer before a new one
    /// is opened [integer]
    #[clap(long, default_value = "32000000", help_heading = "Counting")]
    pub layer_size: u64,
}

/// How to turn each line of input into one or more counted tokens.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TokenizeMode {
    /// Count each input line as a whole sequence.
    Whole,
    /// Slide a k-mer window of `--kmer-size` over each line.
    Kmer,
    /// Slide a k-mer window, collapsing each k-mer with its reverse
    /// complement.
    Canonical,
}

#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// How to turn each input line into counted tokens
    #[clap(long, value_enum, default_value = "whole", help_heading = "Tokenizing")]
    pub mode: TokenizeMode,

    /// K-mer window size, used when `--mode` is `kmer` or `canonical` [integer]
    #[clap(long, default_value = "21", help_heading = "Tokenizing")]
    pub kmer_size: u32,

    /// Skip over invalid bases instead of failing [flag]
    #[clap(long, help_heading = "Tokenizing")]
    pub skip_invalid: bool,
}
