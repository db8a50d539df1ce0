use crate::options::BundleArgs;
use crate::validation::{ValidationContext, validate_context};
use bundlegen::Engine;

/// Run the gen command: validate the bundle and write the generated Rust module.
pub fn run_gen_command(args: &BundleArgs, module: &str, output_dir: &str) -> Result<(), String> {
    let context = ValidationContext::new()
        .with_bundle_dir(args.bundle_dir.clone())
        .with_language_code(args.default_language.clone())
        .with_output_dir(output_dir.to_string());
    validate_context(&context)?;

    let options = args
        .to_generate_options()
        .with_module_name(module)
        .with_output_dir(output_dir);
    let engine = Engine::new(options).map_err(|e| e.to_string())?;
    let path = engine.generate().map_err(|e| e.to_string())?;

    println!("✅ Generated {}", path.display());
    Ok(())
}
