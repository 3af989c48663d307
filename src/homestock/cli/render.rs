use colored::{ColoredString, Colorize};
use homestock::aggregate::{StatKey, StatRecord, Summary};
use homestock::api::{CmdMessage, MessageLevel, RoomGroup};
use homestock::config::HomestockConfig;
use homestock::index::DisplayItem;
use homestock::model::{Amount, Item, ItemType, Room, Status};
use homestock::shopping::ShoppingList;
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

const EMPTY_SHOPPING_LIST: &str = "Votre stock est complet ! Aucune suggestion pour le moment.";
const NOT_AVAILABLE: &str = "N/A";
const DETAIL_INDENT: &str = "      ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn amount_or_na(amount: Option<&Amount>) -> String {
    match amount {
        Some(Amount::Text(s)) if s.trim().is_empty() => NOT_AVAILABLE.to_string(),
        Some(amount) => amount.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn status_colored(name: &str, status: Status) -> ColoredString {
    match status {
        Status::Fresh => name.bold(),
        Status::Expiring => name.yellow().bold(),
        Status::Expired => name.red().bold(),
    }
}

/// `"Quantité: 2 - Expire le: 2024-05-20"` for food, `"Quantité: 2 - Pièce: 🛋️ Salon"` otherwise.
fn item_details(item: &Item) -> String {
    let quantity = amount_or_na(item.quantity.as_ref());
    let place = match item.item_type {
        ItemType::Food => format!(
            "Expire le: {}",
            item.expiry
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        ),
        ItemType::Object => format!("Pièce: {}", item.room.label()),
    };
    format!("Quantité: {} - {}", quantity, place)
}

fn render_item_card(dp: &DisplayItem, full: bool) -> String {
    let item = &dp.item;
    let idx = format!("{}. ", dp.index);
    let mut out = format!(
        "  {}{}\n",
        idx.dimmed(),
        status_colored(&item.name, item.status)
    );
    out.push_str(&format!("{}{}\n", DETAIL_INDENT, item_details(item)));

    if full {
        let extras = [
            ("Type", Some(item.item_type.label().to_string())),
            ("Seuil", item.threshold.as_ref().map(|t| t.to_string())),
            ("Emplacement", item.location.clone()),
            ("Notes", item.notes.clone()),
            ("Code-barres", item.barcode.clone()),
            ("Photo", item.photo.clone()),
            ("Statut", Some(item.status.key().to_string())),
            ("Id", Some(item.id.to_string())),
        ];
        for (label, value) in extras {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                out.push_str(&format!(
                    "{}{}: {}\n",
                    DETAIL_INDENT,
                    label.dimmed(),
                    value
                ));
            }
        }
    }
    out
}

pub(super) fn render_item_cards(items: &[DisplayItem], full: bool) -> String {
    items
        .iter()
        .map(|dp| render_item_card(dp, full))
        .collect::<Vec<_>>()
        .join(if full { "\n" } else { "" })
}

pub(super) fn render_room_groups(groups: &[RoomGroup]) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", group.room.label().bold()));
        out.push_str(&render_item_cards(&group.items, false));
    }
    out
}

pub(super) fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return format!("{}\n", "Aucune suggestion.".dimmed());
    }
    let mut out = format!("{}\n", "Suggestions:".dimmed());
    for s in suggestions {
        out.push_str(&format!("  {}\n", s));
    }
    out
}

pub(super) fn render_stats(summary: &Summary, stats: &[(StatKey, StatRecord)]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Total des articles: {}\n",
        summary.total.to_string().bold()
    ));
    out.push_str(&format!(
        "Expirent bientôt: {}\n",
        summary.expiring_soon.to_string().yellow()
    ));
    out.push_str(&format!(
        "Stock faible: {}\n",
        summary.low_stock.to_string().red()
    ));

    for (key, record) in stats {
        out.push('\n');
        out.push_str(&format!("{}\n", key.label().bold()));
        out.push_str(&format!("  {} articles\n", record.count));

        let mut details = Vec::new();
        if record.low_stock_count > 0 {
            details.push(format!("Stock faible: {}", record.low_stock_count).red());
        }
        if record.expired_count > 0 {
            details.push(format!("Expirés: {}", record.expired_count).red());
        }
        if record.expiring_count > 0 {
            details.push(format!("Expire bientôt: {}", record.expiring_count).yellow());
        }
        if !details.is_empty() {
            let joined: Vec<String> = details.iter().map(|d| d.to_string()).collect();
            out.push_str(&format!("  {}\n", joined.join("  ")));
        }
    }
    out
}

pub(super) fn render_room_counts(counts: &BTreeMap<Room, usize>) -> String {
    let label_width = counts
        .keys()
        .map(|room| room.label().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (room, count) in counts {
        let label = room.label();
        let padding = label_width.saturating_sub(label.width());
        let count_str = count.to_string();
        let count_colored = if *count == 0 {
            count_str.dimmed()
        } else {
            count_str.bold()
        };
        out.push_str(&format!(
            "  {}{}  {}\n",
            label,
            " ".repeat(padding),
            count_colored
        ));
    }
    out
}

pub(super) fn render_shopping_list(list: &ShoppingList) -> String {
    if list.is_empty() {
        return format!("{}\n", EMPTY_SHOPPING_LIST.green());
    }
    let mut out = String::new();
    for item in list.entries() {
        out.push_str(&format!("  - {}\n", shopping_line(item)));
    }
    out
}

/// `"<name> (<quantity> restants)"`
fn shopping_line(item: &Item) -> String {
    let quantity = item
        .quantity
        .as_ref()
        .map(|q| q.to_string())
        .unwrap_or_default();
    format!("{} ({} restants)", item.name, quantity)
}

pub(super) fn render_config(config: &HomestockConfig) -> String {
    let mut out = String::new();
    for key in HomestockConfig::KEYS {
        if let Some(value) = config.get(key) {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    out
}
