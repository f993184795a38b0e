//! Integrationstests über die öffentliche API:
//! - Laden einer Zellfolge aus JSON
//! - Diagonal-Füllung per Drag inkl. Undo/Redo
//! - Rahmenableitung nach Segment-Änderungen
//! - Zurückschreiben und erneutes Laden

use glam::Vec2;
use rpg_map_painter::core::borders::affected_by;
use rpg_map_painter::core::calculate_borders_for;
use rpg_map_painter::{
    calculate_borders, parse_cells_json, write_cells_json, BrushMode, Cell, CellCoord,
    CellGeometry, CellStore, Corner, DiagonalFillTool, PaintSession, PaintTool, PainterOptions,
    SegmentBrushTool, SegmentName, SegmentSet, ToolAction,
};

fn load_staircase() -> CellStore {
    let json = include_str!("fixtures/staircase_cells.json");
    parse_cells_json(json).expect("Fixture sollte parsen")
}

// ─── Laden ───────────────────────────────────────────────────────────────────

#[test]
fn test_fixture_laden_verwirft_zelle_ohne_segmente() {
    let store = load_staircase();

    assert_eq!(store.len(), 6);
    assert!(store.get_cell_at(CellCoord::new(10, 9)).is_none());

    let partial = store
        .get_cell_at(CellCoord::new(9, 9))
        .expect("Segment-Zelle erwartet");
    assert!(partial.has_segments());
    assert_eq!(
        partial.filled_segments(),
        SegmentSet::from_segments(&[SegmentName::N, SegmentName::Ne])
    );

    let faded = store
        .get_cell_at(CellCoord::new(4, 3))
        .expect("volle Zelle erwartet");
    assert_eq!(faded.opacity, Some(0.75));
    assert!(!faded.has_segments());
}

// ─── Diagonal-Füllung ────────────────────────────────────────────────────────

#[test]
fn test_diagonal_drag_fuellt_treppe_und_ist_rueckgaengig_machbar() {
    let options = PainterOptions::default();
    let mut session = PaintSession::new(load_staircase(), &options);
    let mut tool = DiagonalFillTool::from_options(&options);

    let result = {
        let index = session.cells().index();
        assert_eq!(
            tool.on_press(Vec2::new(6.2, 2.2), &index),
            ToolAction::UpdatePreview
        );
        tool.on_drag(Vec2::new(3.3, 5.4), &index);
        assert_eq!(tool.preview().segments.len(), 16);
        tool.on_release(&index).expect("Füll-Ergebnis erwartet")
    };

    assert_eq!(
        result.touched_coords(),
        vec![
            CellCoord::new(3, 5),
            CellCoord::new(4, 4),
            CellCoord::new(5, 3),
            CellCoord::new(6, 2),
        ]
    );
    assert!(session.apply(&result));
    assert_eq!(session.cells().len(), 10);

    for coord in result.touched_coords() {
        let cell = session
            .cells()
            .get_cell_at(coord)
            .expect("gefüllte Ecke erwartet");
        assert_eq!(cell.filled_segments(), Corner::TopLeft.segment_set());
    }
    // Farbe vom ersten gemalten Nachbarn (oben)
    let top = session
        .cells()
        .get_cell_at(CellCoord::new(6, 2))
        .expect("Zelle erwartet");
    assert_eq!(top.color, "#8a6f4d");

    assert!(session.undo());
    assert_eq!(session.cells().len(), 6);
    assert!(session.cells().get_cell_at(CellCoord::new(5, 3)).is_none());

    assert!(session.redo());
    assert_eq!(session.cells().len(), 10);
}

#[test]
fn test_gefuellte_treppe_hat_nur_diagonale_innenlinien() {
    let options = PainterOptions::default();
    let mut session = PaintSession::new(load_staircase(), &options);
    let mut tool = DiagonalFillTool::from_options(&options);

    let result = {
        let index = session.cells().index();
        tool.on_press(Vec2::new(5.1, 3.1), &index);
        tool.on_release(&index).expect("Einzel-Ecke erwartet")
    };
    session.apply(&result);

    let index = session.cells().index();
    let cell = session
        .cells()
        .get_cell_at(CellCoord::new(5, 3))
        .expect("Zelle erwartet");
    let borders = calculate_borders(cell, &index, options.geometry());

    // Diagonale von oben-rechts nach unten-links: zwei Halblinien durch die Mitte
    assert_eq!(borders.internal.len(), 2);
    assert!(borders.external.is_empty());
}

#[test]
fn test_drag_auf_ungueltiger_flaeche_bleibt_ohne_aenderung() {
    let options = PainterOptions {
        diagonal_snap_to_nearest: false,
        ..PainterOptions::default()
    };
    let mut session = PaintSession::new(load_staircase(), &options);
    let mut tool = DiagonalFillTool::from_options(&options);

    let index = session.cells().index();
    assert_eq!(
        tool.on_press(Vec2::new(20.5, 20.5), &index),
        ToolAction::Ignored
    );
    assert!(tool.on_release(&index).is_none());

    assert!(!session.can_undo());
}

// ─── Segment-Pinsel + Rahmen ─────────────────────────────────────────────────

#[test]
fn test_radieren_bis_leer_entfernt_zelle() {
    let options = PainterOptions::default();
    let mut session = PaintSession::new(load_staircase(), &options);

    let mut brush = SegmentBrushTool::from_options(&options);
    brush.mode = BrushMode::Erase;
    let result = {
        let index = session.cells().index();
        // N und NE der Zelle (9, 9)
        brush.on_press(Vec2::new(9.6, 9.05), &index);
        brush.on_drag(Vec2::new(9.95, 9.4), &index);
        brush.on_release(&index).expect("Radier-Ergebnis erwartet")
    };
    session.apply(&result);

    assert!(session.cells().get_cell_at(CellCoord::new(9, 9)).is_none());
    assert_eq!(session.cells().len(), 5);
}

#[test]
fn test_aussenlinien_zwischen_nachbarn_sind_symmetrisch() {
    let store = CellStore::new()
        .set_segments(
            CellCoord::new(0, 0),
            SegmentSet::from_segments(&[SegmentName::E, SegmentName::Ne]),
            "#123456",
            None,
        )
        .set_segments(
            CellCoord::new(1, 0),
            SegmentSet::from_segments(&[SegmentName::W]),
            "#123456",
            None,
        );
    let index = store.index();
    let geometry = CellGeometry::default();

    let left = calculate_borders(
        store.get_cell_at(CellCoord::new(0, 0)).expect("Zelle erwartet"),
        &index,
        geometry,
    );
    let right = calculate_borders(
        store.get_cell_at(CellCoord::new(1, 0)).expect("Zelle erwartet"),
        &index,
        geometry,
    );

    // NE(0,0) trifft auf W(1,0): keine Linie auf beiden Seiten
    assert!(left
        .external
        .iter()
        .all(|border| border.segment != SegmentName::Ne));
    assert!(right
        .external
        .iter()
        .all(|border| border.segment != SegmentName::W));
    // E(0,0) trifft auf leeres SW(1,0)
    assert!(left
        .external
        .iter()
        .any(|border| border.segment == SegmentName::E
            && border.neighbor == Some(CellCoord::new(1, 0))
            && border.neighbor_segment == SegmentName::Sw));
}

#[test]
fn test_betroffene_zellen_nach_aenderung_neu_berechnen() {
    let store = CellStore::from_cells([
        Cell::full(CellCoord::new(0, 0), "#000", None),
        Cell::full(CellCoord::new(1, 0), "#000", None),
    ]);
    let changed = store.remove_segments(
        CellCoord::new(1, 0),
        SegmentSet::from_segments(&[SegmentName::W, SegmentName::Sw]),
    );
    let index = changed.index();

    let borders = calculate_borders_for(
        affected_by(CellCoord::new(1, 0)),
        &index,
        CellGeometry::new(32.0),
    );

    // nur die beiden vorhandenen Zellen liefern Rahmen
    assert_eq!(borders.len(), 2);
    let left = borders
        .iter()
        .find(|b| b.coord == CellCoord::new(0, 0))
        .expect("Rahmen für (0,0) erwartet");
    assert!(left
        .external
        .iter()
        .any(|border| border.segment == SegmentName::Ne));
    assert!(left
        .external
        .iter()
        .any(|border| border.segment == SegmentName::E));
}

// ─── Schreiben ───────────────────────────────────────────────────────────────

#[test]
fn test_schreiben_und_neu_laden_ergibt_gleichen_stand() {
    let store = load_staircase().set_segments(
        CellCoord::new(-2, 4),
        SegmentSet::from_segments(&[SegmentName::S, SegmentName::Sw]),
        "#abcdef",
        Some(0.3),
    );

    let json = write_cells_json(&store).expect("Schreiben erwartet");
    let reloaded = parse_cells_json(&json).expect("erneutes Parsen erwartet");

    assert_eq!(reloaded, store);
}
