use std::{env, fs, process};

use gennaro_vss::{Result, ShamirSecretSharing, VssError};
use rand::rngs::OsRng;

fn run() -> Result<()> {
    // Define the parameters for the sharing, optionally from a JSON file
    let params = match env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .map_err(|e| VssError::InvalidInput(format!("{path}: {e}")))?;
            ShamirSecretSharing::from_json(&json)?
        }
        None => ShamirSecretSharing::new(3, 5)?,
    };

    // Deal a random secret to all parties
    let (secret, shares) = params.deal(&mut OsRng)?;
    for share in &shares {
        println!("Party {} received a share", share.index);
    }

    // Recover it from the first threshold parties
    let recovered = params.reconstruct(&shares[..params.threshold])?;
    if recovered != secret {
        println!("Reconstruction failed!");
        process::exit(1);
    }

    println!(
        "Reconstructed the {}-of-{} secret successfully!",
        params.threshold, params.share_count
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        println!("Secret sharing failed: {}", e);
        process::exit(1);
    }
}
