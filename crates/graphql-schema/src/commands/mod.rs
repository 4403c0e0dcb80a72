mod minify;
mod normalize;
mod print_sdl;

use crate::Cli;
use crate::CommandResult;
use minify::MinifyCmd;
use normalize::NormalizeCmd;
use print_sdl::PrintSdlCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-schema")]
pub(crate) enum CommandEnum {
    /// Rewrites GraphQL documents into their canonical form.
    Normalize(Box<NormalizeCmd>),

    /// Collapses a GraphQL document onto a single line.
    Minify(Box<MinifyCmd>),

    /// Builds a schema and prints its canonical SDL.
    PrintSdl(Box<PrintSdlCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Minify(cmd) => cmd.run(cli).await,
            Self::Normalize(cmd) => cmd.run(cli).await,
            Self::PrintSdl(cmd) => cmd.run(cli).await,
        }
    }
}
