use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UserCommands {
    /// Get a user by ID
    Get {
        /// User ID assigned by the store
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Create a user
    Create {
        /// Username
        username: String,
        /// Email address
        email: String,
    },
}
