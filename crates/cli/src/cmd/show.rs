//! Implementation of the `vlock show` command.
//!
//! Displays the loaded lock state: flags, resources, and each profile with
//! its members resolved to resources.

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use vlock_lib::lock::{LockState, LockStore, Profile};

use crate::output::{OutputFormat, print_json, print_stat, symbols};

pub fn cmd_show(store: &LockStore, output: OutputFormat) -> Result<()> {
  let lock = store.load().context("Failed to load lock file")?;

  if output.is_json() {
    return print_json(&lock);
  }

  print_stat("Version", &lock.version.to_string());
  print_stat("Transaction", &lock.trx_id.to_string());
  print_stat("Active profile", &lock.active_profile);
  print_stat("Load vimrc", &lock.load_vimrc.to_string());
  print_stat("Load gvimrc", &lock.load_gvimrc.to_string());

  println!();
  println!("Repos:");
  if lock.repos().is_empty() {
    println!("  (none)");
  }
  for repos in lock.repos() {
    let version = if repos.version.is_empty() {
      String::new()
    } else {
      format!(" @ {}", repos.version)
    };
    println!(
      "  {} {}{} {}",
      symbols::INFO,
      repos.path,
      version,
      format!("({}, trx {})", repos.kind, repos.trx_id).if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
  }

  println!();
  println!("Profiles:");
  for profile in lock.profiles() {
    print_profile(&lock, profile)?;
  }

  Ok(())
}

fn print_profile(lock: &LockState, profile: &Profile) -> Result<()> {
  let marker = if profile.name == lock.active_profile {
    symbols::ARROW
  } else {
    symbols::INFO
  };
  println!(
    "  {} {} {}",
    marker,
    profile.name.if_supports_color(Stream::Stdout, |s| s.bold()),
    format!("(vimrc: {}, gvimrc: {})", profile.load_vimrc, profile.load_gvimrc)
      .if_supports_color(Stream::Stdout, |s| s.dimmed())
  );

  let resources = lock
    .resources_for_profile(profile)
    .with_context(|| format!("Failed to resolve profile '{}'", profile.name))?;
  for repos in resources {
    println!("      {} {}", symbols::PLUS, repos.path);
  }

  Ok(())
}
