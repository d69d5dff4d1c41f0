use holdem_table::agents::PassiveAgent;
use holdem_table::config::{ConfigError, TableConfig};
use holdem_table::observer::Silent;
use holdem_table::table::{Table, TableError};

fn table(names: &[&str], first: &str) -> Table {
    let config = TableConfig::new(names.iter().copied(), 50.0, 1.0, 2.0)
        .with_small_blind(first)
        .with_seed(21);
    Table::new(config).unwrap()
}

fn names(t: &Table) -> Vec<&str> {
    t.players().iter().map(|p| p.name()).collect()
}

#[test]
fn blinds_move_one_seat_per_hand() {
    let mut t = table(&["Ann", "Bob", "Cid", "Dee"], "Ann");
    let mut seen = Vec::new();
    for _ in 0..5 {
        t.play_hand(&mut PassiveAgent, &mut Silent).unwrap();
        seen.push((t.small_blind_index(), t.big_blind_index()));
        t.prepare_next_hand(&[], &[]).unwrap();
    }
    assert_eq!(seen, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 1)]);
    assert_eq!(t.hands_played(), 5);
}

#[test]
fn heads_up_blinds_swap() {
    let mut t = table(&["Ann", "Bob"], "Bob");
    assert_eq!((t.small_blind_index(), t.big_blind_index()), (1, 0));
    t.prepare_next_hand(&[], &[]).unwrap();
    assert_eq!((t.small_blind_index(), t.big_blind_index()), (0, 1));
}

#[test]
fn departing_big_blind_passes_the_small_blind_on() {
    let mut t = table(&["Ann", "Bob", "Cid", "Dee"], "Ann");
    t.prepare_next_hand(&["Bob"], &[]).unwrap();
    assert_eq!(names(&t), ["Ann", "Cid", "Dee"]);
    assert_eq!(t.players()[t.small_blind_index()].name(), "Cid");
    assert_eq!(t.players()[t.big_blind_index()].name(), "Dee");
}

#[test]
fn departures_before_the_big_blind_keep_it_as_small_blind() {
    let mut t = table(&["Ann", "Bob", "Cid", "Dee"], "Bob");
    t.prepare_next_hand(&["Ann", "Bob"], &[]).unwrap();
    assert_eq!(names(&t), ["Cid", "Dee"]);
    assert_eq!(t.players()[t.small_blind_index()].name(), "Cid");
    assert_eq!(t.players()[t.big_blind_index()].name(), "Dee");
}

#[test]
fn too_few_remaining_ends_the_session_without_changes() {
    let mut t = table(&["Ann", "Bob", "Cid"], "Ann");
    assert_eq!(t.prepare_next_hand(&["Ann", "Bob"], &[]), Err(TableError::NotEnoughPlayers(1)));
    assert_eq!(names(&t), ["Ann", "Bob", "Cid"]);
    assert_eq!(t.small_blind_index(), 0);
}

#[test]
fn unknown_names_are_rejected() {
    let mut t = table(&["Ann", "Bob", "Cid"], "Ann");
    assert_eq!(t.prepare_next_hand(&["Zed"], &[]), Err(TableError::UnknownPlayer("Zed".into())));
    assert_eq!(
        t.prepare_next_hand(&[], &[("Zed", 5.0)]),
        Err(TableError::UnknownPlayer("Zed".into()))
    );
}

#[test]
fn reload_sets_the_stack() {
    let mut t = table(&["Ann", "Bob", "Cid"], "Ann");
    t.play_hand(&mut PassiveAgent, &mut Silent).unwrap();
    t.prepare_next_hand(&[], &[("Cid", 80.0)]).unwrap();
    assert_eq!(t.player("Cid").unwrap().stack(), 80.0);
    assert_eq!(t.prepare_next_hand(&[], &[("Ann", 0.0)]), Err(TableError::NonPositiveReload(0.0)));
}

#[test]
fn same_seed_replays_the_same_session() {
    let play = || {
        let config = TableConfig::new(["Ann", "Bob", "Cid"], 50.0, 1.0, 2.0).with_seed(77);
        let mut t = Table::new(config).unwrap();
        let mut out = Vec::new();
        for _ in 0..3 {
            out.push(t.play_hand(&mut PassiveAgent, &mut Silent).unwrap());
            t.prepare_next_hand(&[], &[]).unwrap();
        }
        out
    };
    assert_eq!(play(), play());
}

#[test]
fn invalid_configuration_is_refused_up_front() {
    let config = TableConfig::new(["Ann"], 50.0, 1.0, 2.0);
    assert_eq!(Table::new(config).err(), Some(ConfigError::PlayerCount(1)));
    let config = TableConfig::new(["Ann", "Bob"], 50.0, 1.0, 2.0).with_small_blind("Zed");
    assert_eq!(Table::new(config).err(), Some(ConfigError::UnknownSmallBlind("Zed".into())));
}
