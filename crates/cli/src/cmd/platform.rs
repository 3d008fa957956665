use anyhow::Result;

use asciify_lib::platform::{current_platform, os_name};

use crate::output::{print_json, print_stat};

pub fn cmd_platform(json: bool) -> Result<()> {
  let platform = current_platform();
  let name = os_name();

  if json {
    return print_json(&serde_json::json!({
      "platform": platform,
      "os_name": name,
      "is_windows": platform.is_windows(),
      "is_mac": platform.is_mac(),
      "is_linux": platform.is_linux(),
    }));
  }

  println!("System:");
  print_stat("Platform", platform.as_str());
  print_stat("OS name", &name);
  Ok(())
}
