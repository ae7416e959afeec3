// Path: crates/utxo/tests/ledger_properties.rs
//! Ledger-level behaviour exercised end to end over the in-memory store.

use ledger_state::MemoryStore;
use ledger_types::app::{Amount, Direction, Utxo};
use ledger_types::config::GenesisConfig;
use ledger_types::error::LedgerError;
use ledger_utxo::records::store_utxo;
use ledger_utxo::UtxoModel;
use proptest::prelude::*;

fn amount(s: &str) -> Amount {
    s.parse().unwrap()
}

fn genesis_ledger() -> (UtxoModel, MemoryStore) {
    let model = UtxoModel::new(GenesisConfig::default());
    let mut state = MemoryStore::new();
    model.initialize(&mut state, "tx0").unwrap();
    (model, state)
}

fn balance(model: &UtxoModel, state: &MemoryStore, address: &str) -> Amount {
    model
        .list_utxos_by_address(state, address)
        .unwrap()
        .iter()
        .fold(Amount::ZERO, |acc, e| acc.checked_add(e.record.amount).unwrap())
}

fn supply(model: &UtxoModel, state: &MemoryStore) -> Amount {
    model
        .list_utxos(state)
        .unwrap()
        .iter()
        .fold(Amount::ZERO, |acc, e| acc.checked_add(e.record.amount).unwrap())
}

#[test]
fn genesis_then_transfer() {
    let (model, mut state) = genesis_ledger();

    let all = model.list_utxos(&state).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].record.amount, amount("50.00"));
    assert_eq!(all[0].record.address, "User A");

    let tx = model
        .transfer(&mut state, "tx1", "User A", "User B", amount("20"))
        .unwrap();
    assert_eq!(tx.inputs.len(), 1);
    assert_eq!(tx.inputs[0].direction, Direction::In);
    assert_eq!(tx.outputs.len(), 2);

    assert_eq!(balance(&model, &state, "User B"), amount("20.00"));
    assert_eq!(balance(&model, &state, "User A"), amount("30.00"));
    assert!(model.get_utxo(&state, "utxo::tx0:1").unwrap().is_none());
    assert_eq!(model.get_transaction(&state, "tx1").unwrap(), Some(tx));
}

#[test]
fn exact_amount_produces_no_change() {
    let (model, mut state) = genesis_ledger();
    let tx = model
        .transfer(&mut state, "tx1", "User A", "User B", amount("50.00"))
        .unwrap();
    assert_eq!(tx.outputs.len(), 1);
    assert!(model.list_utxos_by_address(&state, "User A").unwrap().is_empty());
}

#[test]
fn insufficient_funds_is_a_no_op() {
    let (model, mut state) = genesis_ledger();
    let before = state.clone();
    let err = model
        .transfer(&mut state, "tx1", "User A", "User B", amount("50.01"))
        .unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
    assert_eq!(state, before);
    assert!(model.get_transaction(&state, "tx1").unwrap().is_none());
}

#[test]
fn spent_outputs_cannot_be_spent_again() {
    let (model, mut state) = genesis_ledger();
    model
        .transfer(&mut state, "tx1", "User A", "User B", amount("50"))
        .unwrap();
    let err = model
        .transfer(&mut state, "tx2", "User A", "User C", amount("0.01"))
        .unwrap_err();
    assert_eq!(err.kind(), "InsufficientFundsError");

    // B can move what it received.
    model
        .transfer(&mut state, "tx2", "User B", "User C", amount("12.5"))
        .unwrap();
    assert_eq!(balance(&model, &state, "User C"), amount("12.50"));
    assert_eq!(balance(&model, &state, "User B"), amount("37.50"));
}

#[test]
fn queries_do_not_mutate() {
    let (model, mut state) = genesis_ledger();
    model
        .transfer(&mut state, "tx1", "User A", "User B", amount("1.00"))
        .unwrap();
    let snapshot = state.clone();
    let first = model.list_transactions(&state).unwrap();
    let second = model.list_transactions(&state).unwrap();
    assert_eq!(first, second);
    model.list_utxos_by_address(&state, "User A").unwrap();

    for key in ["utxo::tx1:1", "utxo::tx0:1", "utxo::tx9:1"] {
        let first = model.get_utxo(&state, key).unwrap();
        assert_eq!(model.get_utxo(&state, key).unwrap(), first, "{key}");
    }
    assert!(model.get_utxo(&state, "utxo::tx1:1").unwrap().is_some());
    assert!(model.get_utxo(&state, "utxo::tx9:1").unwrap().is_none());
    for id in ["tx1", "missing"] {
        let first = model.get_transaction(&state, id).unwrap();
        assert_eq!(model.get_transaction(&state, id).unwrap(), first, "{id}");
    }
    assert!(model.get_transaction(&state, "missing").unwrap().is_none());
    assert_eq!(state, snapshot);
}

#[test]
fn identifiers_with_separators_stay_unambiguous() {
    let (model, mut state) = genesis_ledger();
    model
        .transfer(&mut state, "utxo::x:1", "User A", "User B", amount("5"))
        .unwrap();
    assert_eq!(model.list_transactions(&state).unwrap().len(), 2);
    assert_eq!(model.list_utxos(&state).unwrap().len(), 2);
    assert!(model.get_utxo(&state, "utxo::utxo::x:1:1").unwrap().is_some());
}

proptest! {
    #[test]
    fn transfers_conserve_value(
        steps in prop::collection::vec((0usize..3, 0usize..3, 1u64..3000), 1..20)
    ) {
        let addresses = ["User A", "User B", "User C"];
        let (model, mut state) = genesis_ledger();
        let initial = supply(&model, &state);

        for (n, (from, to, units)) in steps.into_iter().enumerate() {
            let requested = Amount::from_minor_units(units);
            let before = state.clone();
            let id = format!("tx{}", n + 1);
            match model.transfer(&mut state, &id, addresses[from], addresses[to], requested) {
                Ok(tx) => {
                    prop_assert_eq!(tx.input_total(), tx.output_total());
                    prop_assert!(tx.outputs.iter().all(|o| !o.amount.is_zero()));
                }
                Err(LedgerError::InsufficientFunds { .. }) => prop_assert_eq!(&state, &before),
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
            prop_assert_eq!(supply(&model, &state), initial);
        }
    }

    #[test]
    fn only_owned_outputs_are_listed_and_spent(
        seeds in prop::collection::vec((0usize..3, any::<bool>(), 1u64..1000), 1..24)
    ) {
        let owners = ["A", "B", "C"];
        let model = UtxoModel::new(GenesisConfig::default());
        let mut state = MemoryStore::new();
        for (i, (owner, out, units)) in seeds.iter().enumerate() {
            let direction = if *out { Direction::Out } else { Direction::In };
            let utxo = Utxo::new(format!("seed{i}"), 1, Amount::from_minor_units(*units), owners[*owner], direction);
            store_utxo(&mut state, &utxo).unwrap();
        }

        for (n, owner) in owners.iter().enumerate() {
            let listed = model.list_utxos_by_address(&state, owner).unwrap();
            let expected = seeds.iter().filter(|(o, out, _)| *o == n && *out).count();
            prop_assert_eq!(listed.len(), expected);
            prop_assert!(listed
                .iter()
                .all(|e| e.record.address == *owner && e.record.direction == Direction::Out));
        }

        let spendable: u64 = seeds
            .iter()
            .filter(|(o, out, _)| *o == 0 && *out)
            .map(|(_, _, units)| units)
            .sum();
        let before = state.clone();
        let over = Amount::from_minor_units(spendable + 1);
        let err = model.transfer(&mut state, "over", "A", "B", over).unwrap_err();
        prop_assert_eq!(err.kind(), "InsufficientFundsError");
        prop_assert_eq!(&state, &before);

        if spendable > 0 {
            let tx = model
                .transfer(&mut state, "all", "A", "B", Amount::from_minor_units(spendable))
                .unwrap();
            for input in &tx.inputs {
                let i: usize = input.transaction_id.trim_start_matches("seed").parse().unwrap();
                prop_assert_eq!(seeds[i].0, 0);
                prop_assert!(seeds[i].1);
            }
            prop_assert!(model.list_utxos_by_address(&state, "A").unwrap().is_empty());
            // A's inbound records are not A's to spend and stay in place.
            let inbound = seeds.iter().filter(|(o, out, _)| *o == 0 && !*out).count();
            let remaining = model
                .list_utxos(&state)
                .unwrap()
                .into_iter()
                .filter(|e| e.record.address == "A")
                .count();
            prop_assert_eq!(remaining, inbound);
        }
    }
}
