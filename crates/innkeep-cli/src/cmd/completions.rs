//! `ik completions`: shell completion scripts.

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::Cli;

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "ik", &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CompletionsArgs;
    use clap::Parser;
    use clap_complete::Shell;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: CompletionsArgs,
    }

    #[test]
    fn shells_parse() {
        let w = Wrapper::parse_from(["test", "bash"]);
        assert_eq!(w.args.shell, Shell::Bash);
    }
}
