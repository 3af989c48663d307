use super::render::{
    print_messages, render_config, render_item_cards, render_room_counts, render_room_groups,
    render_shopping_list, render_stats, render_suggestions,
};
use super::setup::{
    print_grouped_help, print_help_for_command, subcommand_name, Cli, Commands, CoreCommands,
    DataCommands, ItemCommands, ItemFields, MiscCommands, ReportCommands,
};
use clap::Parser;
use homestock::api::{ConfigAction, ExportTarget, HomestockApi, ItemPatch};
use homestock::clock::SystemClock;
use homestock::config::HomestockConfig;
use homestock::error::Result;
use homestock::filter::FilterCriteria;
use homestock::init::{initialize, initialize_recovering};
use homestock::logging;
use homestock::model::{ItemDraft, ItemType, Room, Status};
use homestock::store::fs::FileStore;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

struct AppContext {
    api: HomestockApi<FileStore, SystemClock>,
    config: HomestockConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.help {
        match &cli.command {
            Some(command) => print_help_for_command(subcommand_name(command)),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        match command {
            Some(cmd) => print_help_for_command(cmd),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add {
                name,
                item_type,
                room,
                fields,
            } => handle_add(&mut ctx, name, item_type, room, fields),
            CoreCommands::List {
                room,
                item_type,
                status,
                search,
            } => handle_list(&ctx, room, item_type, status, search),
            CoreCommands::Suggest { term } => handle_suggest(&ctx, term),
        },
        Some(Commands::Item(cmd)) => match cmd {
            ItemCommands::View { selectors } => handle_view(&ctx, selectors),
            ItemCommands::Edit {
                selector,
                name,
                item_type,
                room,
                clear_expiry,
                fields,
            } => {
                let patch = ItemPatch {
                    name,
                    item_type,
                    room,
                    quantity: fields.quantity,
                    threshold: fields.threshold,
                    expiry: fields.expiry,
                    clear_expiry,
                    location: fields.location,
                    notes: fields.notes,
                    barcode: fields.barcode,
                    photo: fields.photo,
                };
                handle_edit(&mut ctx, selector, patch)
            }
            ItemCommands::Delete { selectors, yes } => handle_delete(&mut ctx, selectors, yes),
        },
        Some(Commands::Report(cmd)) => match cmd {
            ReportCommands::Stats => handle_stats(&ctx),
            ReportCommands::Map => handle_map(&ctx),
            ReportCommands::Shop => handle_shop(&ctx),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Export { path } => handle_export(&ctx, path),
            DataCommands::Import { path } => handle_import(&mut ctx, path),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Init => handle_init(&ctx),
            MiscCommands::Help { .. } => Ok(()),
        },
        None => handle_list(&ctx, None, None, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    // These commands either replace the items or never read them, so a
    // corrupt inventory file must not stop them.
    let recover = matches!(
        cli.command,
        Some(Commands::Data(DataCommands::Import { .. }))
            | Some(Commands::Misc(MiscCommands::Config { .. } | MiscCommands::Init))
    );
    let ctx = if recover {
        initialize_recovering(cli.data_dir.as_deref())?
    } else {
        initialize(cli.data_dir.as_deref())?
    };
    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    item_type: ItemType,
    room: Option<Room>,
    fields: ItemFields,
) -> Result<()> {
    let mut draft = ItemDraft::new(name, item_type, room.unwrap_or(ctx.config.default_room));
    draft.quantity = fields.quantity.map(Into::into);
    draft.threshold = fields.threshold.map(Into::into);
    draft.expiry = fields.expiry;
    draft.location = fields.location;
    draft.notes = fields.notes;
    draft.barcode = fields.barcode;
    draft.photo = fields.photo;

    let result = ctx.api.add_item(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    room: Option<Room>,
    item_type: Option<ItemType>,
    status: Option<Status>,
    search: Option<String>,
) -> Result<()> {
    let mut criteria = FilterCriteria::new();
    if let Some(room) = room {
        criteria = criteria.room(room);
    }
    if let Some(item_type) = item_type {
        criteria = criteria.item_type(item_type);
    }
    if let Some(status) = status {
        criteria = criteria.status(status);
    }
    if let Some(term) = search {
        criteria = criteria.search(term);
    }

    let result = ctx.api.list_items(&criteria)?;
    print!("{}", render_room_groups(&result.room_groups));
    if !result.suggestions.is_empty() {
        print!("{}", render_suggestions(&result.suggestions));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_suggest(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.suggest(&term)?;
    print!("{}", render_suggestions(&result.suggestions));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.view_items(&selectors)?;
    print!("{}", render_item_cards(&result.listed_items, true));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, selector: String, patch: ItemPatch) -> Result<()> {
    let result = ctx.api.update_item(&selector, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    if !yes {
        let preview = ctx.api.view_items(&selectors)?;
        print!("{}", render_item_cards(&preview.listed_items, false));
        if !confirm("Êtes-vous sûr de vouloir supprimer cet article ?")? {
            println!("Aborted.");
            return Ok(());
        }
    }
    let result = ctx.api.delete_items(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

/// Asks a yes/no question on stdin. Non-interactive stdin counts as "no".
fn confirm(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        eprintln!("Refusing to delete without confirmation; pass --yes.");
        return Ok(false);
    }
    print!("{} [o/N] ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "o" | "oui" | "y" | "yes"
    ))
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(summary) = &result.summary {
        print!("{}", render_stats(summary, &result.stats));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_map(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.room_map()?;
    if let Some(counts) = &result.room_counts {
        print!("{}", render_room_counts(counts));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_shop(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.shopping_list()?;
    if let Some(list) = &result.shopping_list {
        print!("{}", render_shopping_list(list));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<String>) -> Result<()> {
    let target = match path.as_deref() {
        Some("-") => ExportTarget::Stdout,
        Some(path) => ExportTarget::File(PathBuf::from(path)),
        None => ExportTarget::File(PathBuf::from(&ctx.config.export_file)),
    };
    let result = ctx.api.export_items(target)?;
    if let Some(payload) = &result.export_payload {
        println!("{}", payload);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import_items(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
