use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{ensure_config_dir, get_config_path, get_default_clients_path, Config};
use crate::scoring::{validate_terms, LoanTerms};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Loop until the user enters a number accepted by `accept`.
fn prompt_number(message: &str, default: &str, accept: fn(f64) -> bool) -> Result<f64> {
    loop {
        let input = prompt_with_default(message, default)?;
        match input.parse::<f64>() {
            Ok(v) if accept(v) => return Ok(v),
            Ok(_) => println!("  Invalid: out of range. Try again."),
            Err(_) => println!("  Invalid: must be a number. Try again."),
        }
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("Lead Score Configuration Wizard");
    println!("===============================");
    println!();
    println!("Every client is scored against one loan. Amounts for price and");
    println!("upfront are in UF; ufvalue converts them to pesos.");
    println!();

    let price = prompt_number("Property price", "4500", |v| v > 0.0)?;
    let upfront = prompt_number("Upfront payment", "900", |v| v > 0.0)?;
    let interest = prompt_number("Annual interest rate", "0.045", |v| v >= 0.0)?;
    let ufvalue = prompt_number("UF value in pesos", "37000", |v| v > 0.0)?;

    let loan = LoanTerms {
        price,
        upfront,
        interest,
        ufvalue,
    };
    if let Err(errors) = validate_terms(&loan) {
        // prompt_number already bounds each field; this catches cross-field
        // problems like price <= upfront
        println!();
        for error in &errors {
            println!("  - {}", error);
        }
        anyhow::bail!("Loan terms are not valid, nothing written");
    }

    println!();
    let clients_default = get_default_clients_path();
    let clients_input = prompt_with_default(
        "Client book path",
        &clients_default.display().to_string(),
    )?;
    let clients_file = PathBuf::from(clients_input);

    let config = Config {
        loan,
        clients_file: Some(clients_file),
    };

    let config_path = default_path.unwrap_or_else(get_config_path);
    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Overwrite?", config_path.display()),
            false,
        )?;
        if !overwrite {
            println!("Keeping existing config.");
            return Ok(());
        }
    }

    ensure_config_dir()?;
    let yaml = serde_saphyr::to_string(&config).context("Failed to serialize config")?;
    std::fs::write(&config_path, yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Wrote {}", config_path.display());
    Ok(())
}
