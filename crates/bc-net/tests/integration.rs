//! Integration tests for bc-net: a scripted opening on the base board.

use bc_core::{NodeId, ratio};
use bc_net::{Birdcage, NetError};

fn j(col: u8, row: u8) -> NodeId {
    NodeId::junction(col, row)
}

#[test]
fn scripted_opening_sequence() {
    let mut cage = Birdcage::new(3).unwrap();
    assert_eq!(cage.working().node_count(), 8);
    assert_eq!(cage.working().edge_count(), 13);

    // White cuts A4-Q, black shorts Q with C4.
    cage.cut(j(1, 4), NodeId::Source).unwrap();
    cage.short(NodeId::Source, j(3, 4)).unwrap();

    assert_eq!(cage.working().node_count(), 7);
    assert_eq!(cage.working().edge_count(), 10);
    // D4's resistor now parallels E5's: E4 reaches Q both ways.
    assert_eq!(
        cage.working().resistance(j(5, 4), NodeId::Source),
        Some(&ratio(1, 2))
    );
    // B4's resistor re-attached to Q, filling the hole A5's cut left.
    assert_eq!(
        cage.working().resistance(j(1, 4), NodeId::Source),
        Some(&ratio(1, 1))
    );

    // White cuts C4-C2, addressed through the retired node.
    cage.cut(j(3, 4), j(3, 2)).unwrap();
    // Black shorts A2 into Ground.
    cage.short(j(1, 2), NodeId::Ground).unwrap();

    assert_eq!(cage.working().node_count(), 6);
    assert_eq!(cage.working().edge_count(), 7);
    assert_eq!(
        cage.working().resistance(NodeId::Ground, j(3, 2)),
        Some(&ratio(1, 2))
    );
    assert_eq!(cage.resolve(j(1, 2)), NodeId::Ground);
    assert_eq!(cage.resolve(j(3, 4)), NodeId::Source);

    // Game still open: a path remains, terminals distinct.
    assert!(cage.has_terminal_path());
    assert!(!cage.terminals_merged());
}

#[test]
fn moves_replayed_in_any_form_fail() {
    let mut cage = Birdcage::new(3).unwrap();
    cage.cut(j(1, 4), NodeId::Source).unwrap();
    // The same board move expressed with swapped endpoints.
    assert!(matches!(
        cage.cut(NodeId::Source, j(1, 4)),
        Err(NetError::EdgeNotFound { .. })
    ));

    cage.short(NodeId::Source, j(3, 4)).unwrap();
    assert!(matches!(
        cage.short(j(3, 4), NodeId::Source),
        Err(NetError::EdgeNotFound { .. })
    ));
}
