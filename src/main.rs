use clap::Parser;
use genex::Pattern;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generative pattern sampler
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Patterns to compile
    #[arg(required = true, help = "Genex patterns to sample from")]
    patterns: Vec<String>,

    /// Number of samples per pattern
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Seed for reproducible output
    #[arg(long, help = "Seed the random source for reproducible output")]
    seed: Option<u64>,

    /// Print the compiled tree instead of samples
    #[arg(long, help = "Print each compiled pattern as JSON")]
    ast: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for source in &cli.patterns {
        let pattern: Pattern = source
            .parse()
            .map_err(|e| format!("Failed to compile {:?}: {}", source, e))?;

        if cli.ast {
            println!("{}", serde_json::to_string_pretty(&pattern)?);
            continue;
        }

        println!("{}:", pattern);
        for (i, sample) in pattern.samples(&mut rng).take(cli.count).enumerate() {
            println!("{}. {}", i + 1, sample);
        }
        println!();
    }

    Ok(())
}
