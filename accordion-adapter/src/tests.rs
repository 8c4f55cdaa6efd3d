use crate::*;

use accordion::{
    AccordionError, AccordionOptions, DataModel, Item, RowAnimation, RowPath, RowRange, RowRect,
    ScrollPosition, Section,
};
use std::format;
use std::string::String;
use std::vec::Vec;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Op {
    Begin,
    End,
    Insert(usize, RowRange, RowAnimation),
    Delete(usize, RowRange, RowAnimation),
    Scroll(RowPath, ScrollPosition, bool),
}

/// A list view with fixed one-unit rows that records every command it receives.
struct RecordingView {
    rows: Vec<usize>,
    offset: u64,
    height: u32,
    ops: Vec<Op>,
}

impl RecordingView {
    fn for_binding<P, C>(b: &Binding<P, C>, height: u32) -> Self {
        Self {
            rows: (0..b.number_of_sections())
                .map(|s| b.number_of_rows(s))
                .collect(),
            offset: 0,
            height,
            ops: Vec::new(),
        }
    }
}

impl ListView for RecordingView {
    fn begin_updates(&mut self) {
        self.ops.push(Op::Begin);
    }

    fn end_updates(&mut self) {
        self.ops.push(Op::End);
    }

    fn insert_rows(&mut self, section: usize, rows: RowRange, animation: RowAnimation) {
        self.rows[section] += rows.len();
        self.ops.push(Op::Insert(section, rows, animation));
    }

    fn delete_rows(&mut self, section: usize, rows: RowRange, animation: RowAnimation) {
        self.rows[section] -= rows.len();
        self.ops.push(Op::Delete(section, rows, animation));
    }

    fn rect_for_row(&self, path: RowPath) -> RowRect {
        let before: usize = self.rows[..path.section].iter().sum();
        RowRect {
            start: (before + path.row) as u64,
            size: 1,
        }
    }

    fn visible_bounds(&self) -> RowRect {
        RowRect {
            start: self.offset,
            size: self.height,
        }
    }

    fn scroll_to_row(&mut self, path: RowPath, position: ScrollPosition, animated: bool) {
        let rect = self.rect_for_row(path);
        self.offset = rect.end().saturating_sub(self.height as u64);
        self.ops.push(Op::Scroll(path, position, animated));
    }
}

struct TextCells;

impl CellFactory<&'static str, &'static str, RecordingView> for TextCells {
    type Cell = String;

    fn parent_cell(
        &mut self,
        _view: &mut RecordingView,
        path: RowPath,
        item: &Item<&'static str, &'static str>,
    ) -> String {
        format!("{}:{}", path.row, item.value)
    }

    fn child_cell(
        &mut self,
        _view: &mut RecordingView,
        path: RowPath,
        parent: &Item<&'static str, &'static str>,
        child: &&'static str,
    ) -> String {
        format!("{}:{}/{}", path.row, parent.value, child)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Parent(RowPath, &'static str, bool),
    Child(RowPath, &'static str),
    Scroll(u64),
}

#[derive(Default)]
struct RecordingDelegate {
    events: Vec<Event>,
}

impl AccordionDelegate<&'static str, &'static str> for RecordingDelegate {
    fn on_parent_selected(&mut self, path: RowPath, item: &Item<&'static str, &'static str>) {
        self.events
            .push(Event::Parent(path, item.value, item.is_expanded()));
    }

    fn on_child_selected(
        &mut self,
        path: RowPath,
        _parent: &Item<&'static str, &'static str>,
        child: &&'static str,
    ) {
        self.events.push(Event::Child(path, *child));
    }

    fn parent_row_height(
        &self,
        _path: RowPath,
        _item: &Item<&'static str, &'static str>,
    ) -> Option<u32> {
        Some(44)
    }

    fn child_row_height(
        &self,
        _path: RowPath,
        _parent: &Item<&'static str, &'static str>,
        _child: &&'static str,
    ) -> Option<u32> {
        Some(30)
    }

    fn on_scroll(&mut self, offset: u64) {
        self.events.push(Event::Scroll(offset));
    }
}

type Model = DataModel<&'static str, &'static str>;

fn layout() -> Model {
    DataModel::from_sections([Section::new([
        Item::with_children("P0", ["a", "b"]),
        Item::new("P1"),
        Item::with_children("P2", ["x", "y", "z"]),
    ])
    .with_header("Letters")
    .with_footer("3 groups")])
}

fn range(start: usize, end: usize) -> RowRange {
    RowRange {
        start_index: start,
        end_index: end,
    }
}

fn cells(b: &Binding<&'static str, &'static str>, view: &mut RecordingView) -> Vec<String> {
    (0..b.number_of_rows(0))
        .filter_map(|row| b.cell_for_row(view, &mut TextCells, RowPath::new(0, row)))
        .collect()
}

#[test]
fn answers_count_and_title_queries() {
    let b = Binding::new(layout(), AccordionOptions::single());
    assert_eq!(b.number_of_sections(), 1);
    assert_eq!(b.number_of_rows(0), 3);
    assert_eq!(b.number_of_rows(1), 0);
    assert_eq!(b.title_for_header(0), Some("Letters"));
    assert_eq!(b.title_for_footer(0), Some("3 groups"));
    assert_eq!(b.title_for_header(1), None);
}

#[test]
fn builds_cells_for_parents_and_children() {
    let mut b = Binding::new(layout(), AccordionOptions::multiple());
    let mut view = RecordingView::for_binding(&b, 100);
    assert_eq!(cells(&b, &mut view), ["0:P0", "1:P1", "2:P2"]);

    b.did_select_row(&mut view, &mut NoopDelegate, RowPath::new(0, 0));
    assert_eq!(
        cells(&b, &mut view),
        ["0:P0", "1:P0/a", "2:P0/b", "3:P1", "4:P2"]
    );
    assert!(
        b.cell_for_row(&mut view, &mut TextCells, RowPath::new(0, 5))
            .is_none()
    );
}

#[test]
fn tap_in_multiple_mode_inserts_rows() {
    let mut b = Binding::new(layout(), AccordionOptions::multiple());
    let mut view = RecordingView::for_binding(&b, 100);
    let mut delegate = RecordingDelegate::default();

    let t = b
        .did_select_row(&mut view, &mut delegate, RowPath::new(0, 0))
        .unwrap();
    assert_eq!(t.insertions().next(), Some((0, range(1, 3))));
    assert_eq!(
        view.ops,
        [
            Op::Begin,
            Op::Insert(0, range(1, 3), RowAnimation::Fade),
            Op::End
        ]
    );
    assert_eq!(view.rows, [5]);
    assert_eq!(
        delegate.events,
        [Event::Parent(RowPath::new(0, 0), "P0", true)]
    );
}

#[test]
fn tap_in_single_mode_collapses_then_expands() {
    let mut b = Binding::new(layout(), AccordionOptions::single());
    let mut view = RecordingView::for_binding(&b, 100);
    let mut delegate = RecordingDelegate::default();

    b.did_select_row(&mut view, &mut delegate, RowPath::new(0, 0));
    view.ops.clear();

    b.did_select_row(&mut view, &mut delegate, RowPath::new(0, 4));
    assert_eq!(
        view.ops,
        [
            Op::Begin,
            Op::Delete(0, range(1, 3), RowAnimation::Fade),
            Op::Insert(0, range(3, 6), RowAnimation::Fade),
            Op::End
        ]
    );
    assert_eq!(view.rows, [b.number_of_rows(0)]);
    assert_eq!(view.rows, [6]);
    // P2 moved up from row 4 to row 2 once P0 collapsed.
    assert_eq!(
        delegate.events.last(),
        Some(&Event::Parent(RowPath::new(0, 2), "P2", true))
    );
    assert_eq!(
        cells(&b, &mut view),
        ["0:P0", "1:P1", "2:P2", "3:P2/x", "4:P2/y", "5:P2/z"]
    );
}

#[test]
fn scrolls_when_inserted_rows_leave_the_viewport() {
    let mut b = Binding::new(layout(), AccordionOptions::single());
    let mut view = RecordingView::for_binding(&b, 4);

    b.did_select_row(&mut view, &mut NoopDelegate, RowPath::new(0, 2));
    assert_eq!(
        view.ops.last(),
        Some(&Op::Scroll(RowPath::new(0, 5), ScrollPosition::Bottom, true))
    );
    assert_eq!(view.offset, 2);
}

#[test]
fn does_not_scroll_when_rows_stay_visible() {
    let mut b = Binding::new(layout(), AccordionOptions::single());
    let mut view = RecordingView::for_binding(&b, 4);

    b.did_select_row(&mut view, &mut NoopDelegate, RowPath::new(0, 0));
    assert_eq!(view.ops.last(), Some(&Op::End));
    assert_eq!(view.offset, 0);
}

#[test]
fn scroll_can_be_disabled() {
    let options = AccordionOptions::single()
        .with_scroll_on_expand(false)
        .with_animations(RowAnimation::Top, RowAnimation::Bottom);
    let mut b = Binding::new(layout(), options);
    let mut view = RecordingView::for_binding(&b, 4);

    b.did_select_row(&mut view, &mut NoopDelegate, RowPath::new(0, 2));
    assert_eq!(
        view.ops,
        [
            Op::Begin,
            Op::Insert(0, range(3, 6), RowAnimation::Top),
            Op::End
        ]
    );

    b.did_select_row(&mut view, &mut NoopDelegate, RowPath::new(0, 2));
    assert_eq!(
        view.ops[3..],
        [
            Op::Begin,
            Op::Delete(0, range(3, 6), RowAnimation::Bottom),
            Op::End
        ]
    );
}

#[test]
fn child_tap_only_notifies_delegate() {
    let mut b = Binding::new(layout(), AccordionOptions::multiple());
    let mut view = RecordingView::for_binding(&b, 100);
    let mut delegate = RecordingDelegate::default();

    b.did_select_row(&mut view, &mut delegate, RowPath::new(0, 2));
    view.ops.clear();
    delegate.events.clear();

    assert!(
        b.did_select_row(&mut view, &mut delegate, RowPath::new(0, 4))
            .is_none()
    );
    assert!(view.ops.is_empty());
    assert_eq!(delegate.events, [Event::Child(RowPath::new(0, 4), "y")]);
}

#[test]
fn parent_without_children_is_selected_but_not_toggled() {
    let mut b = Binding::new(layout(), AccordionOptions::single());
    let mut view = RecordingView::for_binding(&b, 100);
    let mut delegate = RecordingDelegate::default();

    assert!(
        b.did_select_row(&mut view, &mut delegate, RowPath::new(0, 1))
            .is_none()
    );
    assert!(view.ops.is_empty());
    assert_eq!(
        delegate.events,
        [Event::Parent(RowPath::new(0, 1), "P1", false)]
    );
}

#[test]
fn out_of_range_tap_does_nothing() {
    let mut b = Binding::new(layout(), AccordionOptions::single());
    let mut view = RecordingView::for_binding(&b, 100);
    let mut delegate = RecordingDelegate::default();

    assert!(
        b.did_select_row(&mut view, &mut delegate, RowPath::new(0, 3))
            .is_none()
    );
    assert!(view.ops.is_empty());
    assert!(delegate.events.is_empty());
}

#[test]
fn heights_come_from_the_delegate() {
    let mut b = Binding::new(layout(), AccordionOptions::multiple());
    let mut view = RecordingView::for_binding(&b, 100);
    b.did_select_row(&mut view, &mut NoopDelegate, RowPath::new(0, 0));

    let delegate = RecordingDelegate::default();
    assert_eq!(b.height_for_row(&delegate, RowPath::new(0, 0)), Some(44));
    assert_eq!(b.height_for_row(&delegate, RowPath::new(0, 1)), Some(30));
    assert_eq!(b.height_for_row(&delegate, RowPath::new(0, 3)), Some(44));
    assert_eq!(b.height_for_row(&delegate, RowPath::new(0, 9)), None);
    assert_eq!(b.height_for_row(&NoopDelegate, RowPath::new(0, 0)), None);
}

#[test]
fn scroll_events_are_forwarded() {
    let b = Binding::new(layout(), AccordionOptions::single());
    let mut delegate = RecordingDelegate::default();
    b.did_scroll(&mut delegate, 120);
    b.did_scroll(&mut delegate, 80);
    assert_eq!(delegate.events, [Event::Scroll(120), Event::Scroll(80)]);
}

#[test]
fn collapse_all_is_one_batch() {
    let mut b = Binding::new(layout(), AccordionOptions::multiple());
    let mut view = RecordingView::for_binding(&b, 100);
    b.did_select_row(&mut view, &mut NoopDelegate, RowPath::new(0, 0));
    b.did_select_row(&mut view, &mut NoopDelegate, RowPath::new(0, 4));
    view.ops.clear();

    b.collapse_all(&mut view);
    assert_eq!(
        view.ops,
        [
            Op::Begin,
            Op::Delete(0, range(5, 8), RowAnimation::Fade),
            Op::Delete(0, range(1, 3), RowAnimation::Fade),
            Op::End
        ]
    );
    assert_eq!(view.rows, [3]);

    view.ops.clear();
    b.collapse_all(&mut view);
    assert!(view.ops.is_empty());
}

#[test]
fn programmatic_expand_applies_rows() {
    let mut b = Binding::new(layout(), AccordionOptions::single());
    let mut view = RecordingView::for_binding(&b, 100);

    let t = b.expand(&mut view, 0, 2).unwrap().unwrap();
    assert_eq!(t.parent, 2);
    assert_eq!(view.rows, [6]);

    assert_eq!(
        b.expand(&mut view, 0, 7),
        Err(AccordionError::ParentOutOfRange {
            section: 0,
            parent: 7,
            len: 3
        })
    );

    b.collapse(&mut view, 0, 2).unwrap();
    assert_eq!(view.rows, [3]);
    assert_eq!(
        view.ops,
        [
            Op::Begin,
            Op::Insert(0, range(3, 6), RowAnimation::Fade),
            Op::End,
            Op::Begin,
            Op::Delete(0, range(3, 6), RowAnimation::Fade),
            Op::End
        ]
    );
}
