use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Store the backend credential locally
    Login {
        /// Bearer token issued by the backend
        #[arg(long)]
        token: String,
        /// Override the backend base URL (defaults to the production host)
        #[arg(long)]
        url: Option<String>,
    },

    /// Clear the stored credential (no server-side invalidation)
    Logout,

    /// Show the configured host and whether a credential is stored
    Session {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch and print the feed, newest first
    Feed {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// View one snap: count down its duration, then mark it seen
    View {
        snap_id: String,
        /// Emit JSON and skip the interactive countdown
        #[arg(long)]
        json: bool,
    },
}
