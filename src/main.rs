use clap::Subcommand;

mod cli_exec;
mod cli_runtime;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List activities with remaining spots and participants
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Check teacher credentials against the server
    Login {
        #[command(flatten)]
        auth: AuthArgs,
    },

    /// Sign a student up for an activity
    Signup {
        /// Activity name (as listed)
        #[arg(long)]
        activity: String,
        /// Student email
        #[arg(long)]
        email: String,
        #[command(flatten)]
        auth: AuthArgs,
    },

    /// Remove a student from an activity
    Unregister {
        /// Activity name (as listed)
        #[arg(long)]
        activity: String,
        /// Student email
        #[arg(long)]
        email: String,
        #[command(flatten)]
        auth: AuthArgs,
    },
}

#[derive(clap::Args)]
pub(crate) struct AuthArgs {
    /// Teacher username
    #[arg(long, short = 'u')]
    pub(crate) username: String,
    /// Teacher password
    #[arg(long, short = 'p')]
    pub(crate) password: String,
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
