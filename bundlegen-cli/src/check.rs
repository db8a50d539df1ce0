use crate::options::BundleArgs;
use crate::validation::{ValidationContext, validate_context};
use bundlegen::{Bundle, Engine};

/// Run the check command: validate the bundle without generating code.
pub fn run_check_command(args: &BundleArgs, json_output: bool) -> Result<(), String> {
    let context = ValidationContext::new()
        .with_bundle_dir(args.bundle_dir.clone())
        .with_language_code(args.default_language.clone());
    validate_context(&context)?;

    let engine = Engine::new(args.to_generate_options()).map_err(|e| e.to_string())?;
    let bundle = engine.run().map_err(|e| e.to_string())?;

    if json_output {
        let json = serde_json::to_string_pretty(&bundle)
            .map_err(|e| format!("Failed to serialize bundle JSON: {}", e))?;
        println!("{}", json);
    } else {
        print_summary(&bundle);
    }

    Ok(())
}

fn print_summary(bundle: &Bundle) {
    let languages = bundle
        .languages
        .iter()
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    println!("=== Bundle ===");
    println!("Default language: {}", bundle.default_language);
    println!("Languages: {}", languages);
    println!("Identifiers: {}", bundle.records.len());
    println!("Status: {}", if bundle.has_status { "yes" } else { "no" });
    println!("Code: {}", if bundle.has_code { "yes" } else { "no" });
    println!("✅ Bundle is valid");
}
