//! Analytics over a live store: recurrence, hotspots, and KPI flows that
//! span create/update/verify lifecycles.

use chrono::Utc;

use innkeep_core::config::TrackerConfig;
use innkeep_core::model::room;
use innkeep_core::model::ticket::{Impact, Role, Status, Urgency};
use innkeep_core::model::ticket_id::TicketId;
use innkeep_core::store::{
    MemorySnapshots, SystemClock, TicketDraft, TicketStore, VerificationChecklist,
};
use innkeep_triage::recurrence::RecurrenceIndex;
use innkeep_triage::{kpi, rank, report};

fn seeded_store() -> TicketStore<SystemClock> {
    let (store, _) = TicketStore::open(Box::new(MemorySnapshots::new()), SystemClock)
        .expect("open store");
    store
}

fn draft(room: &str, asset: &str) -> TicketDraft {
    TicketDraft {
        room: room.into(),
        asset: asset.into(),
        issue: "strange-noise".into(),
        description: "Something rattles.".into(),
        urgency: Some(Urgency::Low),
        impact: Some(Impact::None),
        ..TicketDraft::default()
    }
}

#[test]
fn repeated_pair_flags_both_but_not_a_different_asset() {
    let mut store = seeded_store();
    store
        .create(draft("117", "locks"), Role::Reception, "Ticket created")
        .expect("create");
    store
        .create(draft("117", "locks"), Role::Reception, "Ticket created")
        .expect("create");
    store
        .create(draft("117", "furniture"), Role::Reception, "Ticket created")
        .expect("create");

    let config = TrackerConfig::default();
    let index = RecurrenceIndex::build(store.tickets(), &config.analytics, store.now());

    let in_room: Vec<_> = store
        .tickets()
        .iter()
        .filter(|t| t.room == "117")
        .collect();
    assert_eq!(in_room.len(), 3);

    let lock_tickets: Vec<_> = in_room
        .iter()
        .copied()
        .filter(|t| t.asset == "locks")
        .collect();
    for t in &lock_tickets {
        assert!(index.ticket_is_recurrent(t), "{} is recurrent", t.id);
    }
    let furniture = in_room
        .iter()
        .copied()
        .find(|t| t.asset == "furniture")
        .expect("third ticket");
    assert!(!index.ticket_is_recurrent(furniture));
}

#[test]
fn three_recent_tickets_make_a_hotspot_two_do_not() {
    let mut store = seeded_store();
    for _ in 0..2 {
        store
            .create(draft("119", "plumbing"), Role::Cleaning, "Ticket created")
            .expect("create");
    }

    let config = TrackerConfig::default();
    let index = RecurrenceIndex::build(store.tickets(), &config.analytics, store.now());
    assert!(!index.room_is_hotspot("119"));

    store
        .create(draft("119", "electrical"), Role::Cleaning, "Ticket created")
        .expect("create");
    let index = RecurrenceIndex::build(store.tickets(), &config.analytics, store.now());
    assert!(index.room_is_hotspot("119"));
}

#[test]
fn verifying_a_ticket_moves_it_from_pending_to_closed() {
    let mut store = seeded_store();
    let config = TrackerConfig::default();

    let before = kpi::kpis(store.tickets(), &config.analytics, store.now());
    assert_eq!(before.pending, 8);
    assert_eq!(before.closed_recently, 1, "seed T-1008 closed a day ago");

    let id = TicketId::new_unchecked("T-1004"); // resolved in seed data
    store
        .verify(
            &id,
            Role::Management,
            VerificationChecklist {
                area_clean: true,
                asset_functional: true,
            },
        )
        .expect("verify");

    let after = kpi::kpis(store.tickets(), &config.analytics, store.now());
    assert_eq!(after.pending, before.pending - 1);
    assert_eq!(after.closed_recently, before.closed_recently + 1);
}

#[test]
fn ranking_follows_store_scores() {
    let store = seeded_store();
    let ranked = rank::top_priority(store.tickets(), None);

    assert!(!ranked.is_empty());
    for pair in ranked.windows(2) {
        assert!(pair[0].priority >= pair[1].priority);
    }
    assert!(ranked.iter().all(|t| t.status != Status::Verified));
}

#[test]
fn full_report_tracks_a_blocking_flow() {
    let mut store = seeded_store();
    let config = TrackerConfig::default();

    let candidate = rank::block_candidate(store.tickets())
        .expect("seed has open tickets")
        .id
        .clone();
    store
        .update(
            &candidate,
            innkeep_core::store::TicketPatch {
                status: Some(Status::WaitingPart),
                needs_part: Some(true),
                part_name: Some("compressor relay".into()),
                ..innkeep_core::store::TicketPatch::default()
            },
            Role::Maintenance,
            "Waiting for part: compressor relay",
        )
        .expect("block");

    let report = report::build(
        store.tickets(),
        &room::catalog(),
        &config,
        store.now(),
    );

    assert_eq!(report.kpis.blocked, 3, "seed had two blocked tickets");
    assert!(report
        .parts_needed
        .iter()
        .any(|row| row.ticket == candidate.to_string()
            && row.part.as_deref() == Some("compressor relay")));
}
