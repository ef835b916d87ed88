use clap::{Parser, Subcommand};
use imagedb::model::ImageId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imagedb", version)]
#[command(about = "Upload, tag, browse, search, preview and delete images", long_about = None)]
pub struct Cli {
    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Simulated save latency in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    pub save_latency_ms: Option<u64>,

    /// Simulated delete latency in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    pub delete_latency_ms: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(
    name = "imagedb",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Stage an image file for upload
    #[command(alias = "s")]
    Select { path: PathBuf },

    /// Set the display name of the staged image (blank: use the file name)
    Name {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Set comma-separated tags for the staged image
    Tags {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tags: Vec<String>,
    },

    /// Save the staged image
    Save,

    /// Stage and save a file in one step
    #[command(alias = "up")]
    Upload {
        path: PathBuf,

        /// Display name (defaults to the file name without extension)
        #[arg(short, long, default_value = "")]
        name: String,

        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,
    },

    /// List saved images, optionally filtered by name
    #[command(alias = "ls")]
    List {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Preview an image
    #[command(alias = "v")]
    View { id: ImageId },

    /// Close the preview
    Close,

    /// Delete an image
    #[command(alias = "rm")]
    Delete { id: ImageId },

    /// Show pending operations, preview and staged upload
    Status,

    /// Wait for all pending saves and deletes
    Wait,

    /// Leave the session (pending operations finish first)
    #[command(alias = "exit")]
    Quit,
}
