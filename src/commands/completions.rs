use crate::{constants::BIN_NAME, Cli};
use anyhow::{anyhow, Result};
use clap::CommandFactory;
use clap_complete::{
    generate,
    shells::{Bash, Fish, Zsh},
};
use std::io;

pub fn run(shell: String) -> Result<()> {
    let mut cmd = Cli::command();
    match shell.as_str() {
        "bash" => generate(Bash, &mut cmd, BIN_NAME, &mut io::stdout()),
        "zsh" => generate(Zsh, &mut cmd, BIN_NAME, &mut io::stdout()),
        "fish" => generate(Fish, &mut cmd, BIN_NAME, &mut io::stdout()),
        other => {
            return Err(anyhow!(
                "unsupported shell '{}', choose: bash, zsh, fish",
                other
            ))
        }
    }
    Ok(())
}
