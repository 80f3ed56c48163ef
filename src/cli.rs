use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "c9ai")]
#[command(about = "Autonomous AI-powered productivity shell", long_about = None)]
#[command(version = env!("C9AI_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a Claude session with a prompt
    Claude {
        /// Prompt to start the session with
        #[arg(trailing_var_arg = true)]
        prompt: Vec<String>,

        /// Run the autonomous step loop instead of a session
        #[arg(short = 'a', long)]
        autonomous: bool,
    },

    /// Start a Gemini session with a prompt
    Gemini {
        /// Prompt to start the session with
        #[arg(trailing_var_arg = true)]
        prompt: Vec<String>,

        /// Run the autonomous step loop instead of a session
        #[arg(short = 'a', long)]
        autonomous: bool,
    },

    /// Switch the default AI model (claude, gemini, local)
    Switch {
        model: Option<String>,
    },

    /// Manage todos in ./todo.md (list, add, actions, execute, sync)
    Todos {
        action: Option<String>,

        /// Task text, or todo numbers for `execute`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Show usage statistics
    Analytics,

    /// List executable tools in ~/.c9ai/tools
    Tools,

    /// Manage local models (list, install, remove, status)
    Models {
        action: Option<String>,
        name: Option<String>,
    },

    /// Show configuration
    Config,

    /// Start the interactive shell (the default)
    #[command(visible_alias = "i")]
    Interactive,
}
