//! Drop routing tests: hit-testing drops into cells, grouping and
//! ungrouping nodes.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{engine_with_layout, HostEvent, MockHost};
use tablegrid::{DropRouter, GroupId, NodeId, Point, Size, UNGROUP_OFFSET};

#[test]
fn attach_resolves_cell_by_drop_position() {
    let mut host = MockHost::new(300.0, 200.0);
    let mut engine = engine_with_layout(2, 2, &mut host);
    let mut router = DropRouter::new();

    let node = NodeId(1);
    host.set_drop_position(node, 50.0, 50.0);
    host.clear_events();
    router.attach(&mut engine, &mut host, node, None);

    let cell = engine.cell_at(0, 0).unwrap();
    assert_eq!(cell.occupant(), Some(node));
    assert_eq!(router.cell_of(node), Some(cell.id()));
    assert!(router.is_grouped(node));

    let rect = cell.rect();
    assert!(host
        .events
        .contains(&HostEvent::PlaceNode(node, cell.id(), rect)));
    assert!(host.events.contains(&HostEvent::RerouteConnectors(node)));
    assert!(host.events.contains(&HostEvent::TableModified(GroupId(7))));
}

#[test]
fn attach_picks_first_containing_cell_in_sequence_order() {
    let mut host = MockHost::new(300.0, 200.0);
    let mut engine = engine_with_layout(2, 2, &mut host);
    let mut router = DropRouter::new();

    let node = NodeId(2);
    host.set_drop_position(node, 160.0, 110.0);
    router.attach(&mut engine, &mut host, node, None);

    let cell = engine.cell_at(1, 1).unwrap();
    assert_eq!(cell.occupant(), Some(node));
    assert_eq!(router.cell_of(node), Some(cell.id()));
}

#[test]
fn attach_outside_all_cells_leaves_node_ungrouped() {
    let mut host = MockHost::new(300.0, 200.0);
    let mut engine = engine_with_layout(2, 2, &mut host);
    let mut router = DropRouter::new();

    let node = NodeId(3);
    // Inside the padding ring, outside every cell
    host.set_drop_position(node, 1.0, 1.0);
    host.clear_events();
    router.attach(&mut engine, &mut host, node, None);

    assert!(!router.is_grouped(node));
    assert!(engine.cells().all(|c| !c.is_occupied()));
    assert!(host.events.is_empty());
}

#[test]
fn attach_without_sampled_position_is_a_no_op() {
    let mut host = MockHost::new(300.0, 200.0);
    let mut engine = engine_with_layout(2, 2, &mut host);
    let mut router = DropRouter::new();

    router.attach(&mut engine, &mut host, NodeId(4), None);
    assert!(engine.cells().all(|c| !c.is_occupied()));
}

#[test]
fn attach_to_explicit_target_skips_hit_test() {
    let mut host = MockHost::new(300.0, 200.0);
    let mut engine = engine_with_layout(2, 2, &mut host);
    let mut router = DropRouter::new();

    let node = NodeId(5);
    // Drop position points at (0,0) but the explicit target wins
    host.set_drop_position(node, 10.0, 10.0);
    let target = engine.cell_at(1, 0).unwrap().id();
    router.attach(&mut engine, &mut host, node, Some(target));

    assert_eq!(engine.cell_at(1, 0).unwrap().occupant(), Some(node));
    assert!(!engine.cell_at(0, 0).unwrap().is_occupied());
}

#[test]
fn attach_rejects_foreign_cell_handle() {
    let mut host = MockHost::new(300.0, 200.0);
    let mut other_host = MockHost::new(300.0, 200.0);
    let mut engine = engine_with_layout(2, 2, &mut host);
    let other = engine_with_layout(4, 4, &mut other_host);
    let mut router = DropRouter::new();

    // A handle from another engine is an internal-consistency error.
    let foreign = other.cell_at(3, 3).unwrap().id();
    host.clear_events();
    router.attach(&mut engine, &mut host, NodeId(6), Some(foreign));

    assert!(!router.is_grouped(NodeId(6)));
    assert!(engine.cells().all(|c| !c.is_occupied()));
    assert!(host.events.is_empty());
}

#[test]
fn detach_restores_pregroup_state() {
    let mut host = MockHost::new(300.0, 200.0);
    let mut engine = engine_with_layout(2, 2, &mut host);
    let mut router = DropRouter::new();

    let node = NodeId(7);
    host.set_node_size(node, 80.0, 40.0);
    host.set_drop_position(node, 50.0, 50.0);
    router.attach(&mut engine, &mut host, node, None);
    host.clear_events();

    router.detach(&mut engine, &mut host, node, true);

    assert_eq!(router.cell_of(node), None);
    assert!(!engine.cell_at(0, 0).unwrap().is_occupied());
    assert_eq!(
        host.events,
        vec![
            HostEvent::SetNodeSize(node, Size::new(80.0, 40.0)),
            HostEvent::ReparentToCanvas(node),
            HostEvent::OffsetNode(node, Point::new(10.0, 10.0)),
            HostEvent::RaiseAboveGroup(node),
        ]
    );
}

#[test]
fn detach_without_transform_skips_offset() {
    let mut host = MockHost::new(300.0, 200.0);
    let mut engine = engine_with_layout(2, 2, &mut host);
    let mut router = DropRouter::new();

    let node = NodeId(8);
    host.set_drop_position(node, 50.0, 50.0);
    router.attach(&mut engine, &mut host, node, None);
    host.clear_events();

    router.detach(&mut engine, &mut host, node, false);

    assert!(!host
        .events
        .iter()
        .any(|e| matches!(e, HostEvent::OffsetNode(_, _))));
    assert!(host.events.contains(&HostEvent::ReparentToCanvas(node)));
}

#[test]
fn detach_of_ungrouped_node_is_a_no_op() {
    let mut host = MockHost::new(300.0, 200.0);
    let mut engine = engine_with_layout(2, 2, &mut host);
    let mut router = DropRouter::new();

    host.clear_events();
    router.detach(&mut engine, &mut host, NodeId(9), true);
    assert!(host.events.is_empty());
}

#[test]
fn ungroup_offset_matches_visual_delta() {
    assert_eq!(UNGROUP_OFFSET, Point::new(10.0, 10.0));
}
