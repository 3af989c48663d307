use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use homestock::model::{ItemType, Room, Status};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "homestock",
    bin_name = "homestock",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Household inventory: rooms, expiry dates and shopping lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding inventoryItems.json and config.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Item,
    Report,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Item => "Per-Item Commands:",
            CommandGroup::Report => "Reports:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "list" | "suggest" => Some(CommandGroup::Core),
            "view" | "edit" | "delete" => Some(CommandGroup::Item),
            "stats" | "map" | "shop" => Some(CommandGroup::Report),
            "export" | "import" => Some(CommandGroup::Data),
            "config" | "init" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Core,
            CommandGroup::Item,
            CommandGroup::Report,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("homestock {version}\n"));
    output.push_str("Household inventory: rooms, expiry dates and shopping lists\n");
    output.push('\n');
    output.push_str("Usage: homestock [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --data-dir <DIR>  Directory holding the inventory\n");
    output.push_str("  -v, --verbose         Verbose output\n");
    output.push_str("  -h, --help            Print help\n");
    output.push_str("  -V, --version         Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

pub fn subcommand_name(command: &Commands) -> &'static str {
    match command {
        Commands::Core(c) => match c {
            CoreCommands::Add { .. } => "add",
            CoreCommands::List { .. } => "list",
            CoreCommands::Suggest { .. } => "suggest",
        },
        Commands::Item(c) => match c {
            ItemCommands::View { .. } => "view",
            ItemCommands::Edit { .. } => "edit",
            ItemCommands::Delete { .. } => "delete",
        },
        Commands::Report(c) => match c {
            ReportCommands::Stats => "stats",
            ReportCommands::Map => "map",
            ReportCommands::Shop => "shop",
        },
        Commands::Data(c) => match c {
            DataCommands::Export { .. } => "export",
            DataCommands::Import { .. } => "import",
        },
        Commands::Misc(c) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Init => "init",
            MiscCommands::Help { .. } => "help",
        },
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Item(ItemCommands),

    #[command(flatten)]
    Report(ReportCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

/// Fields shared by `add` and `edit`.
#[derive(clap::Args, Debug, Default)]
pub struct ItemFields {
    /// Quantity (free text, e.g. 3 or 500g)
    #[arg(short, long)]
    pub quantity: Option<String>,

    /// Low-stock threshold
    #[arg(short, long)]
    pub threshold: Option<String>,

    /// Expiry date (YYYY-MM-DD), food only
    #[arg(short, long, value_name = "DATE")]
    pub expiry: Option<NaiveDate>,

    /// Where in the room (shelf, drawer...)
    #[arg(long)]
    pub location: Option<String>,

    /// Free notes
    #[arg(long)]
    pub notes: Option<String>,

    #[arg(long)]
    pub barcode: Option<String>,

    /// Photo reference (path or URL)
    #[arg(long)]
    pub photo: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add an item
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Item name
        name: String,

        /// food or objects
        #[arg(long = "type", short = 'k', default_value = "objects")]
        item_type: ItemType,

        /// Room (defaults to the configured default-room)
        #[arg(short, long)]
        room: Option<Room>,

        #[command(flatten)]
        fields: ItemFields,
    },

    /// List items grouped by room
    #[command(alias = "ls", display_order = 2)]
    List {
        #[arg(short, long)]
        room: Option<Room>,

        /// food or objects
        #[arg(long = "type", short = 'k')]
        item_type: Option<ItemType>,

        /// fresh, expiring or expired
        #[arg(long)]
        status: Option<Status>,

        /// Search term (name, case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Suggest item names matching a term
    #[command(display_order = 3)]
    Suggest { term: String },
}

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// View one or more items
    #[command(alias = "v", display_order = 10)]
    View {
        /// Indexes or ids of the items (e.g. 1 3 id:42)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Change fields of an item
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Index or id of the item (id:<id> forces an id)
        selector: String,

        #[arg(short, long)]
        name: Option<String>,

        /// food or objects
        #[arg(long = "type", short = 'k')]
        item_type: Option<ItemType>,

        #[arg(short, long)]
        room: Option<Room>,

        /// Remove the expiry date
        #[arg(long, conflicts_with = "expiry")]
        clear_expiry: bool,

        #[command(flatten)]
        fields: ItemFields,
    },

    /// Delete one or more items
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Indexes or ids of the items (e.g. 1 3 id:42)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals and per room/type statistics
    #[command(display_order = 20)]
    Stats,

    /// Item count for every room
    #[command(display_order = 21)]
    Map,

    /// Shopping list of low-stock items
    #[command(alias = "shopping", display_order = 22)]
    Shop,
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export all items as JSON
    #[command(display_order = 30)]
    Export {
        /// Target file, or - for stdout (defaults to the configured export-file)
        path: Option<String>,
    },

    /// Replace all items with a JSON export
    #[command(display_order = 31)]
    Import { path: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 40)]
    Config {
        /// Configuration key (default-room, export-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory
    #[command(display_order = 41)]
    Init,

    /// Print help for homestock or a subcommand
    #[command(display_order = 42)]
    Help {
        command: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn grouped_help_lists_every_group() {
        let help = get_grouped_help();
        for group in CommandGroup::all() {
            assert!(help.contains(group.heading()), "missing {}", group.heading());
        }
        assert!(help.contains("shop"));
    }

    #[test]
    fn every_subcommand_has_a_group() {
        for sc in Cli::command().get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no group",
                sc.get_name()
            );
        }
    }

    #[test]
    fn parses_add_with_fields() {
        let args = "homestock add Lait --type food --room cuisine -q 2 -t 1 --expiry 2024-05-20";
        let cli = Cli::try_parse_from(args.split_whitespace()).unwrap();
        match cli.command {
            Some(Commands::Core(CoreCommands::Add {
                name,
                item_type,
                room,
                fields,
            })) => {
                assert_eq!(name, "Lait");
                assert_eq!(item_type, ItemType::Food);
                assert_eq!(room, Some(Room::Cuisine));
                assert_eq!(fields.quantity.as_deref(), Some("2"));
                assert_eq!(fields.expiry, NaiveDate::from_ymd_opt(2024, 5, 20));
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_room() {
        let args = ["homestock", "add", "X", "--room", "grenier"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn delete_takes_many_selectors() {
        let args = ["homestock", "rm", "1", "3", "-y"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Commands::Item(ItemCommands::Delete { selectors, yes })) => {
                assert_eq!(selectors, vec!["1", "3"]);
                assert!(yes);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }
}
