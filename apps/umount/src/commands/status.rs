use anyhow::Result;
use colored::Colorize;

/// Report whether `device` appears in the mount table
pub async fn execute(device: &str, json: bool) -> Result<()> {
    let mounted = super::unmounter()?.is_mounted(device).await?;

    if json {
        let value = serde_json::json!({ "device": device, "mounted": mounted });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if mounted {
        println!("{} is {}", device, "mounted".green());
    } else {
        println!("{} is {}", device, "not mounted".dimmed());
    }
    Ok(())
}
