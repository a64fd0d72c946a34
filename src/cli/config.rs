use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current settings
    Show,

    /// Change a setting (folders-including, editor)
    Set {
        /// Setting key
        key: String,

        /// New value; folders-including takes `;`-separated folders or `*`
        value: String,
    },

    /// Restore a setting to its default
    Unset {
        /// Setting key
        key: String,
    },
}
