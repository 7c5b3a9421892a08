//! Manage named monitor presets.

use tasklens_common::config::MonitorPresets;

pub fn save(name: String, spec: String, description: Option<String>) -> anyhow::Result<()> {
    let description = description.unwrap_or_default();
    let mut presets = MonitorPresets::load();
    presets.set(&name, &spec, &description);
    presets.save()?;

    println!("Saved preset '{name}': monitors={spec}");
    if !description.is_empty() {
        println!("  Description: {description}");
    }
    Ok(())
}

pub fn list() -> anyhow::Result<()> {
    let presets = MonitorPresets::load();

    if presets.is_empty() {
        println!("No presets saved yet.");
        println!();
        println!("Create one with:");
        println!("  tasklens preset save <name> <monitors>");
        return Ok(());
    }

    println!("Saved monitor presets:");
    for (name, preset) in presets.iter() {
        println!("  {name}: {}", preset.monitors);
        if !preset.description.is_empty() {
            println!("    Description: {}", preset.description);
        }
        if !preset.created.is_empty() {
            println!("    Created: {}", preset.created);
        }
    }
    println!();
    println!("Use one with:");
    println!("  tasklens start \"Task name\" --monitors \"$(tasklens preset get <name>)\"");

    Ok(())
}

/// Print the raw spec so shells can substitute it; unknown names print
/// "all" instead of failing.
pub fn get(name: String) -> anyhow::Result<()> {
    let presets = MonitorPresets::load();
    println!("{}", presets.resolve(&name));
    Ok(())
}
