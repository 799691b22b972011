//! The `labcoach hints` command.

use anyhow::Result;

use labcoach_core::catalog;

pub fn execute(experiment: String) -> Result<()> {
    let definition = catalog::lookup(&experiment)?;

    println!("{}", definition.display_name);
    println!();

    match definition.hints {
        Some(hints) => {
            println!("Read these questions to help you think about the necessary steps.");
            println!();
            for hint in hints {
                println!("- {hint}");
            }
        }
        None => println!("No hints are available for this experiment yet."),
    }

    Ok(())
}
