use anyhow::Result;
use clap::Parser;
use mdpc_mceliece::{
    gf::{FiniteField, Gf4},
    keys::{generate_key_pair, PublicKey},
    parameters::{BLOCK_LENGTH, BLOCK_WEIGHT, MAX_ITERATIONS},
    random::{get_rng_from_seed, random_vector, Seed},
};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "mdpc-mceliece",
    about = "Generate a QC-MDPC key pair over GF(4), encode a random plaintext, \
             and decode it"
)]
struct Args {
    /// PRNG seed as a 256-bit hex string (drawn from OS entropy if omitted)
    #[arg(short, long)]
    seed: Option<String>,
    /// Circulant block length r
    #[arg(short = 'r', long, default_value_t = BLOCK_LENGTH)]
    block_length: usize,
    /// Hamming weight w of each parity-check block
    #[arg(short = 'w', long, default_value_t = BLOCK_WEIGHT)]
    block_weight: usize,
    /// Iteration budget for the symbol-flipping decoder
    #[arg(short, long, default_value_t = MAX_ITERATIONS)]
    iterations: usize,
    /// Print the generated public key as JSON
    #[arg(long)]
    print_key: bool,
}

#[derive(Debug, Serialize)]
struct KeyRecord<'a> {
    seed: Seed,
    block_length: usize,
    block_weight: usize,
    public_key: &'a PublicKey<Gf4>,
}

fn run(args: &Args) -> Result<bool> {
    let seed = match &args.seed {
        Some(hex) => Seed::try_from(hex.clone())?,
        None => Seed::from_entropy(),
    };
    println!("seed: {seed}");
    let mut rng = get_rng_from_seed(seed);

    println!(
        "generating key pair (r = {}, w = {})",
        args.block_length, args.block_weight
    );
    let (public_key, private_key) =
        generate_key_pair::<Gf4, _>(args.block_length, args.block_weight, &mut rng)?;
    if args.print_key {
        let record = KeyRecord {
            seed,
            block_length: args.block_length,
            block_weight: args.block_weight,
            public_key: &public_key,
        };
        println!("{}", serde_json::to_string(&record)?);
    }

    let message: Vec<Gf4> = random_vector(args.block_length, &mut rng);
    let codeword = public_key.encode(&message)?;
    println!(
        "encoded a random plaintext of {} symbols into {} symbols",
        message.len(),
        codeword.len()
    );

    match private_key.decode(&codeword, args.iterations)? {
        Some(error_vector) if error_vector.iter().all(Gf4::is_zero) => {
            println!("decoded: recovered error vector is zero");
            Ok(true)
        }
        Some(_) => {
            println!("decoded to a different codeword");
            Ok(false)
        }
        None => {
            println!(
                "decoder did not converge within {} iterations",
                args.iterations
            );
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
