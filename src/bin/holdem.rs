use clap::Parser;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use holdem_table::agents::{BotAgent, BotProfile, SeatAgents};
use holdem_table::betting::{Action, ActionError, ActionProvider, SeatView};
use holdem_table::cards::Card;
use holdem_table::config::TableConfig;
use holdem_table::observer::TableObserver;
use holdem_table::player::Player;
use holdem_table::table::{HandSummary, ShowdownEntry, Street, Table, TableError};
use holdem_table::Chips;
use std::process::ExitCode;

/// Play Texas Hold'em at one table from the terminal.
#[derive(Parser, Debug)]
#[command(name = "holdem", version = holdem_table::VERSION)]
struct Args {
    /// Comma-separated player names in seating order
    #[arg(long, value_delimiter = ',', default_value = "Henry,Ahmad")]
    players: Vec<String>,

    /// Players driven by the computer instead of the keyboard
    #[arg(long, value_delimiter = ',')]
    bots: Vec<String>,

    #[arg(long, default_value_t = 20.0)]
    stack: Chips,

    #[arg(long, default_value_t = 0.1)]
    small_blind: Chips,

    #[arg(long, default_value_t = 0.25)]
    big_blind: Chips,

    /// Player who posts the first small blind (random otherwise)
    #[arg(long)]
    first_small_blind: Option<String>,

    /// Seed for shuffling, blind choice, and bots
    #[arg(long)]
    seed: Option<u64>,

    /// Play this many hands without prompting between them; busted players leave
    #[arg(long)]
    hands: Option<u64>,
}

/// Asks the person at the keyboard for each decision.
struct Console;

impl Console {
    fn raise_amount(view: &SeatView<'_>) -> Option<Chips> {
        let min = view.raise_increment;
        Input::<Chips>::new()
            .with_prompt(format!("Raise by (min {min})"))
            .validate_with(move |amount: &Chips| -> Result<(), &str> {
                if amount.is_finite() && *amount >= min {
                    Ok(())
                } else {
                    Err("Raise too small")
                }
            })
            .interact_text()
            .map_err(|e| log::error!("input failed: {e}"))
            .ok()
    }
}

impl ActionProvider for Console {
    fn act(&mut self, view: &SeatView<'_>) -> Action {
        let p = view.player;
        let hole = p.hole_cards().map(|h| cards_text(&h)).unwrap_or_default();
        let call = if view.to_call() > 0.0 {
            format!("Call {}", view.to_call())
        } else {
            "Check".into()
        };
        let choices = [call.as_str(), "Raise", "Fold"];
        let prompt = format!(
            "{} holds {hole} | board [{}] | pot {} | bet {} | in {} | stack {}",
            p.name(),
            cards_text(view.community),
            view.pot,
            view.current_bet,
            p.street_contribution(),
            p.available()
        );
        let selection =
            Select::new().with_prompt(prompt).items(&choices).default(0).interact();
        let selection = match selection {
            Ok(i) => i,
            Err(e) => {
                log::error!("input failed, folding {}: {e}", p.name());
                return Action::Fold;
            }
        };
        match selection {
            0 => Action::Call,
            1 => Console::raise_amount(view).map_or(Action::Fold, Action::Raise),
            _ => Action::Fold,
        }
    }

    fn rejected(&mut self, view: &SeatView<'_>, error: &ActionError) {
        println!("  {}: {error}, try again", view.player.name());
    }
}

/// Prints what happens at the table.
struct Printer;

impl TableObserver for Printer {
    fn hand_started(&mut self, hand: u64, small_blind: &Player, big_blind: &Player) {
        println!(
            "\n=== Hand {hand}: small blind {}, big blind {} ===",
            small_blind.name(),
            big_blind.name()
        );
    }

    fn street_dealt(&mut self, street: Street, community: &[Card]) {
        if !community.is_empty() {
            println!("-- {}: {}", street.label(), cards_text(community));
        }
    }

    fn action_taken(&mut self, _street: Street, player: &Player, action: Action) {
        match action {
            Action::Raise(amount) => println!("  {} raises by {amount}", player.name()),
            _ => println!("  {} {}s", player.name(), action.label().to_lowercase()),
        }
    }

    fn showdown(&mut self, entries: &[ShowdownEntry]) {
        println!("-- Showdown");
        for e in entries {
            println!("  {}: {} -> {}", e.name, cards_text(&e.hole), e.evaluation);
        }
    }

    fn hand_settled(&mut self, summary: &HandSummary) {
        let verb = if summary.is_split() { "split" } else { "wins" };
        println!(
            "  {} {verb} the pot of {}, {} each",
            summary.winners.join(" & "),
            summary.pot,
            summary.share
        );
    }
}

fn cards_text(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

fn print_stacks(table: &Table) {
    for p in table.players() {
        println!("  {:<12} {}", p.name(), p.stack());
    }
}

/// Between-hands questions. `None` ends the session.
fn ask_changes(table: &Table) -> Option<(Vec<String>, Vec<(String, Chips)>)> {
    let another = Confirm::new().with_prompt("Play another hand?").default(true).interact().ok()?;
    if !another {
        return None;
    }
    let names: Vec<&str> = table.players().iter().map(Player::name).collect();
    let leaving_idx =
        MultiSelect::new().with_prompt("Who leaves the table?").items(&names).interact().ok()?;
    let leaving: Vec<String> = leaving_idx.iter().map(|&i| names[i].to_string()).collect();

    let mut reloads = Vec::new();
    for p in table.players().iter().filter(|p| !leaving.iter().any(|n| n == p.name())) {
        let wants = Confirm::new()
            .with_prompt(format!("Reload {} (stack {})?", p.name(), p.stack()))
            .default(p.stack() <= 0.0)
            .interact()
            .ok()?;
        if wants {
            let amount = Input::<Chips>::new()
                .with_prompt("New stack")
                .validate_with(|a: &Chips| -> Result<(), &str> {
                    if a.is_finite() && *a > 0.0 { Ok(()) } else { Err("Must be positive") }
                })
                .interact_text()
                .ok()?;
            reloads.push((p.name().to_string(), amount));
        }
    }
    Some((leaving, reloads))
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = TableConfig::new(
        args.players.iter().map(|s| s.trim()),
        args.stack,
        args.small_blind,
        args.big_blind,
    );
    if let Some(name) = args.first_small_blind {
        config = config.with_small_blind(name);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut table = Table::new(config)?;

    let mut agents = SeatAgents::new(Box::new(Console));
    for (i, name) in args.bots.iter().map(|s| s.trim()).enumerate() {
        if table.player(name).is_none() {
            return Err(TableError::UnknownPlayer(name.to_string()).into());
        }
        let mut profile = BotProfile::default();
        if let Some(seed) = args.seed {
            profile = profile.with_seed(seed.wrapping_add(i as u64 + 1));
        }
        agents.assign(name, Box::new(BotAgent::new(profile)));
    }

    loop {
        match table.play_hand(&mut agents, &mut Printer) {
            Ok(_) => {}
            Err(TableError::NotEnoughPlayers(n)) => {
                println!("Only {n} player(s) with chips left, session over.");
                break;
            }
            Err(e) => eprintln!("hand aborted: {e}"),
        }
        print_stacks(&table);

        let (leaving, reloads) = match args.hands {
            Some(limit) if table.hands_played() >= limit => break,
            Some(_) => {
                let busted: Vec<String> = table
                    .players()
                    .iter()
                    .filter(|p| p.stack() <= 0.0)
                    .map(|p| p.name().to_string())
                    .collect();
                (busted, Vec::new())
            }
            None => match ask_changes(&table) {
                Some(changes) => changes,
                None => break,
            },
        };
        let leaving: Vec<&str> = leaving.iter().map(String::as_str).collect();
        let reloads: Vec<(&str, Chips)> = reloads.iter().map(|(n, a)| (n.as_str(), *a)).collect();
        if let Err(e) = table.prepare_next_hand(&leaving, &reloads) {
            println!("{e}, session over.");
            break;
        }
    }
    println!("\nFinal stacks after {} hand(s):", table.hands_played());
    print_stacks(&table);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
