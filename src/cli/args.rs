use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "edudesk")]
#[command(about = "Messaging and focus timer for the school dashboard")]
#[command(long_about = "edudesk - Messaging and focus timer for the school dashboard

Direct and group messaging between admins, teachers, students and parents,
with unread counts, plus a pomodoro-style focus/break timer with daily and
weekly statistics. State is kept in ~/.edudesk/edudesk.db.

QUICK START:
  edudesk chat send --from t1 --name \"Ms. Reed\" --role teacher --to s1 \"Quiz on Friday\"
  edudesk chat inbox --user s1          Conversations and unread count
  edudesk focus run                     Live focus timer
  edudesk focus stats                   Today's cycles and the past week

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  edudesk <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output. Defaults to `general.default_output` from
    /// the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    ///
    /// Overridden by the `EDUDESK_LOG` environment variable.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send and read messages
    ///
    /// Direct messages between two users share one conversation per pair,
    /// created on the first message. Group conversations are created
    /// explicitly with 'edudesk chat group'.
    #[command(alias = "c")]
    Chat(ChatArgs),

    /// Focus timer
    ///
    /// Alternates focus and break intervals (25 and 5 minutes by default).
    /// Completed intervals are recorded for daily and weekly statistics.
    #[command(alias = "f")]
    Focus(FocusArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   edudesk completions zsh > ~/.zsh/completions/_edudesk
    ///   source <(edudesk completions bash)
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for chat.
#[derive(Args)]
pub struct ChatArgs {
    #[command(subcommand)]
    pub command: ChatCommands,
}

/// Chat subcommands.
#[derive(Subcommand)]
pub enum ChatCommands {
    /// Send a message
    ///
    /// Use --to for a direct message or --conversation for a group.
    ///
    /// Examples:
    ///   edudesk chat send --from t1 --name "Ms. Reed" --role teacher --to s1 "See you at 9"
    ///   edudesk chat send --from s1 --name Ana --conversation 01J... "Done!"
    ///   edudesk chat send --from t1 --name "Ms. Reed" --to s1 \
    ///       --file worksheet.pdf --url https://files.school/ws.pdf --size 20480
    Send(SendArgs),

    /// Create a group conversation
    ///
    /// Examples:
    ///   edudesk chat group --name "Class 7B" --members t1,s1,s2,p1
    Group {
        /// Conversation name
        #[arg(long, short = 'n')]
        name: String,

        /// Comma-separated participant ids
        #[arg(long, short = 'm', value_delimiter = ',', required = true)]
        members: Vec<String>,
    },

    /// Add a participant to a group conversation
    Join {
        /// Conversation id
        #[arg(long, short = 'c')]
        conversation: String,

        /// User id
        #[arg(long, short = 'u')]
        user: String,
    },

    /// Remove a participant from a group conversation
    Leave {
        /// Conversation id
        #[arg(long, short = 'c')]
        conversation: String,

        /// User id
        #[arg(long, short = 'u')]
        user: String,
    },

    /// List a user's conversations, most recent first
    #[command(alias = "i")]
    Inbox {
        /// User id
        #[arg(long, short = 'u')]
        user: String,
    },

    /// Show the messages of a conversation, oldest first
    ///
    /// Examples:
    ///   edudesk chat thread --conversation 01J...
    ///   edudesk chat thread --between t1 s1
    Thread {
        /// Conversation id
        #[arg(long, short = 'c', conflicts_with = "between", required_unless_present = "between")]
        conversation: Option<String>,

        /// Two user ids; shows their direct messages
        #[arg(long, short = 'b', num_args = 2, value_names = ["A", "B"])]
        between: Option<Vec<String>>,
    },

    /// Mark a conversation read for a user
    Read {
        /// Conversation id
        #[arg(long, short = 'c')]
        conversation: String,

        /// User id
        #[arg(long, short = 'u')]
        user: String,
    },

    /// Mark a single message read
    ReadMessage {
        /// Message id
        id: String,
    },

    /// Replace a message's text
    Edit {
        /// Message id
        id: String,

        /// New text
        text: String,
    },

    /// Delete a message
    Delete {
        /// Message id
        id: String,
    },
}

/// Arguments for `chat send`.
#[derive(Args)]
pub struct SendArgs {
    /// Sender user id
    #[arg(long)]
    pub from: String,

    /// Sender display name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Sender role (admin, teacher, student, parent)
    ///
    /// Defaults to `chat.default_role` from the config file.
    #[arg(long, short = 'r')]
    pub role: Option<String>,

    /// Recipient user id (direct message)
    #[arg(long, short = 't', conflicts_with = "conversation", required_unless_present = "conversation")]
    pub to: Option<String>,

    /// Conversation id (group message)
    #[arg(long, short = 'c')]
    pub conversation: Option<String>,

    /// Attach a file with this name
    #[arg(long, conflicts_with = "image", requires = "url")]
    pub file: Option<String>,

    /// Attach an image with this name
    #[arg(long, requires = "url")]
    pub image: Option<String>,

    /// URL of the attached file or image
    #[arg(long)]
    pub url: Option<String>,

    /// Size of the attachment in bytes
    #[arg(long, default_value_t = 0)]
    pub size: u64,

    /// Message text
    pub text: Option<String>,
}

/// Arguments for focus mode.
#[derive(Args)]
pub struct FocusArgs {
    #[command(subcommand)]
    pub command: FocusCommands,
}

/// Focus mode subcommands.
#[derive(Subcommand)]
pub enum FocusCommands {
    /// Run the timer live
    ///
    /// Opens a terminal UI: space starts/pauses, r resets, s skips to the
    /// next interval, q quits. With --plain, starts immediately and prints
    /// the remaining time once per second until the interval completes.
    Run {
        /// Line output instead of the terminal UI
        #[arg(long, short = 'p')]
        plain: bool,
    },

    /// Show the timer status
    Status,

    /// Show completed cycles and the past week
    ///
    /// Examples:
    ///   edudesk focus stats
    ///   edudesk focus stats --date 2024-09-02
    Stats {
        /// Local calendar day to count cycles for (YYYY-MM-DD, default today)
        #[arg(long, short = 'd')]
        date: Option<String>,
    },

    /// List completed intervals, most recent first
    History {
        /// Maximum number of entries
        #[arg(long, short = 'l', default_value = "20")]
        limit: usize,
    },

    /// Set interval lengths
    ///
    /// Examples:
    ///   edudesk focus config --focus 50 --break 10
    Config {
        /// Focus length in minutes
        #[arg(long = "focus", value_parser = clap::value_parser!(u32).range(1..))]
        focus_minutes: Option<u32>,

        /// Break length in minutes
        #[arg(long = "break", value_parser = clap::value_parser!(u32).range(1..))]
        break_minutes: Option<u32>,
    },

    /// Delete history and counters
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
