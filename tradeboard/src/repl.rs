use clap::{error::ErrorKind, Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use tradeboard_api_types::{ListingType, World};
use tradeboard_app::{
    display::{ItemDetails, ListingCard},
    CatalogStatus, MarketSession, NoticeLevel,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(value: Toggle) -> Self {
        value == Toggle::On
    }
}

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Search the catalog by name, leave empty to clear the search
    Search { term: Vec<String> },
    /// Only show items with a shop or street price
    Tradeable { state: Toggle },
    /// Only show members items
    Members { state: Toggle },
    /// Turn both filters off
    ClearFilters,
    /// Pick the item to post about
    Select { name: Vec<String> },
    /// Details of the selected item
    Show,
    /// Post a listing for the selected item
    Post {
        listing_type: ListingType,
        quantity: String,
        price: String,
        ingame_name: String,
        #[arg(short, long, default_value = "1")]
        world: World,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },
    /// Recent posts, newest first
    Feed,
    /// Catalog load state
    Status,
    #[command(alias = "exit")]
    Quit,
}

pub(crate) fn handle_line(
    session: &mut MarketSession,
    line: &str,
    out: &mut impl Write,
) -> io::Result<Flow> {
    // shell-style words so names with spaces can be quoted
    let Some(words) = shlex::split(line) else {
        writeln!(out, "Unbalanced quotes")?;
        return Ok(Flow::Continue);
    };
    if words.is_empty() {
        return Ok(Flow::Continue);
    }
    let command = match Line::try_parse_from(words) {
        Ok(line) => line.command,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            write!(out, "{}", e.render())?;
            return Ok(Flow::Continue);
        }
        Err(e) => {
            writeln!(out, "{}", e.render())?;
            return Ok(Flow::Continue);
        }
    };
    let flow = run(session, command, out)?;
    for notice in session.notices_mut().drain() {
        let prefix = match notice.level {
            NoticeLevel::Info => "i",
            NoticeLevel::Success => "+",
            NoticeLevel::Warning => "!",
            NoticeLevel::Error => "x",
        };
        writeln!(out, "[{prefix}] {}", notice.message)?;
    }
    Ok(flow)
}

fn run(session: &mut MarketSession, command: Command, out: &mut impl Write) -> io::Result<Flow> {
    match command {
        Command::Search { term } => {
            session.set_search_term(term.join(" "));
            print_results(session, out)?;
        }
        Command::Tradeable { state } => {
            session.set_tradeable(state.into());
            print_results(session, out)?;
        }
        Command::Members { state } => {
            session.set_members_only(state.into());
            print_results(session, out)?;
        }
        Command::ClearFilters => {
            session.clear_filters();
            print_results(session, out)?;
        }
        Command::Select { name } => match session.select_item(&name.join(" ")) {
            Ok(item) => writeln!(out, "{}", ItemDetails::from(item))?,
            Err(e) => writeln!(out, "{e}")?,
        },
        Command::Show => match session.selected_item() {
            Some(item) => writeln!(out, "{}", ItemDetails::from(item))?,
            None => writeln!(out, "Nothing selected, use `select <name>`")?,
        },
        Command::Post {
            listing_type,
            quantity,
            price,
            ingame_name,
            world,
            message,
        } => {
            let draft = session.draft_mut();
            draft.listing_type = listing_type;
            draft.quantity = quantity;
            draft.price = price;
            draft.ingame_name = ingame_name;
            draft.world = world;
            draft.message = message.join(" ");
            match session.submit_listing() {
                Ok(listing) => writeln!(out, "{}", ListingCard(listing))?,
                // validation failures arrive as notices
                Err(tradeboard_app::AppError::Listing(_)) => {}
                Err(e) => writeln!(out, "{e}")?,
            }
        }
        Command::Feed => {
            if session.feed().is_empty() {
                writeln!(out, "No posts yet")?;
            }
            for listing in session.feed().iter() {
                writeln!(out, "{}", ListingCard(listing))?;
            }
        }
        Command::Status => match session.catalog().status() {
            CatalogStatus::NotLoaded => writeln!(out, "Catalog not loaded")?,
            CatalogStatus::Loaded { items } => writeln!(out, "Catalog loaded, {items} items")?,
            CatalogStatus::Failed => writeln!(out, "Catalog unavailable, no items to show")?,
        },
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn print_results(session: &MarketSession, out: &mut impl Write) -> io::Result<()> {
    if !session.is_searching() {
        return Ok(());
    }
    writeln!(out, "{} items found", session.result_count())?;
    for item in session.results() {
        writeln!(out, "  {} ({})", item.name, item.location)?;
    }
    if session.filters().is_active() {
        writeln!(out, "Filters active, `clear-filters` to reset")?;
    }
    Ok(())
}
