//! Shell completions generation.

use std::io::Write;

use clap_complete::Shell;

/// Write the completion script for `shell` to stdout.
pub fn run(shell: Shell) -> crate::error::Result<()> {
    generate(shell, &mut std::io::stdout());
    Ok(())
}

/// Write the completion script for `shell` to `out`.
pub fn generate(shell: Shell, out: &mut dyn Write) {
    let mut cmd = <super::Cli as clap::CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "coolors-colormap", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_flags() {
        let mut out = Vec::new();
        generate(Shell::Bash, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("coolors-colormap"));
        assert!(script.contains("--pretty"));
    }
}
