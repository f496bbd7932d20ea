use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt a single 16-byte block
    Encrypt(BlockArgs),

    /// Decrypt a single 16-byte block
    Decrypt(BlockArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct BlockArgs {
    /// Key as a hex string of 16, 24, or 32 bytes.
    #[arg(short = 'k', long = "key", value_name = "HEX")]
    pub key: String,

    /// Input block as a hex string of 16 bytes.
    #[arg(short = 'b', long = "block", value_name = "HEX")]
    pub block: String,

    /// Print the FIPS-197 Appendix C style round trace before the result.
    #[arg(short = 't', long = "trace")]
    pub trace: bool,
}
