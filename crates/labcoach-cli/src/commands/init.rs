//! The `labcoach init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("labcoach.toml").exists() {
        println!("labcoach.toml already exists, skipping.");
    } else {
        std::fs::write("labcoach.toml", SAMPLE_CONFIG)?;
        println!("Created labcoach.toml");
    }

    println!("\nNext steps:");
    println!("  1. Put your Gemini key in the GEMINI_API_KEY environment variable");
    println!("  2. Run: labcoach experiments");
    println!("  3. Run: labcoach feedback --experiment light --file my-procedure.txt");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# labcoach configuration

# Resolved from the environment at startup.
api_key = "${GEMINI_API_KEY}"

model = "gemini-2.0-flash"

# "guided" asks leading questions; "direct" states the corrections.
tone = "guided"

temperature = 0.7
"#;
