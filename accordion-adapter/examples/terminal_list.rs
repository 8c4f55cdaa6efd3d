use accordion::{
    AccordionOptions, DataModel, Item, RowAnimation, RowPath, RowRange, RowRect, ScrollPosition,
};
use accordion_adapter::{AccordionDelegate, Binding, CellFactory, ListView};

// A fake terminal list: one line per row, a fixed number of visible lines.
struct Terminal {
    rows: usize,
    offset: u64,
    lines: u32,
}

impl ListView for Terminal {
    fn begin_updates(&mut self) {
        println!("-- begin");
    }

    fn end_updates(&mut self) {
        println!("-- end (rows={})", self.rows);
    }

    fn insert_rows(&mut self, section: usize, rows: RowRange, animation: RowAnimation) {
        self.rows += rows.len();
        println!("insert s{section} {:?} {animation:?}", rows.indexes());
    }

    fn delete_rows(&mut self, section: usize, rows: RowRange, animation: RowAnimation) {
        self.rows -= rows.len();
        println!("delete s{section} {:?} {animation:?}", rows.indexes());
    }

    fn rect_for_row(&self, path: RowPath) -> RowRect {
        RowRect {
            start: path.row as u64,
            size: 1,
        }
    }

    fn visible_bounds(&self) -> RowRect {
        RowRect {
            start: self.offset,
            size: self.lines,
        }
    }

    fn scroll_to_row(&mut self, path: RowPath, position: ScrollPosition, _animated: bool) {
        self.offset = (path.row as u64 + 1).saturating_sub(self.lines as u64);
        println!(
            "scroll to row {} ({position:?}), offset={}",
            path.row, self.offset
        );
    }
}

struct Lines;

impl CellFactory<&'static str, &'static str, Terminal> for Lines {
    type Cell = String;

    fn parent_cell(
        &mut self,
        _view: &mut Terminal,
        _path: RowPath,
        item: &Item<&'static str, &'static str>,
    ) -> String {
        let mark = if item.is_expanded() { "v" } else { ">" };
        format!("{mark} {}", item.value)
    }

    fn child_cell(
        &mut self,
        _view: &mut Terminal,
        _path: RowPath,
        _parent: &Item<&'static str, &'static str>,
        child: &&'static str,
    ) -> String {
        format!("    {child}")
    }
}

struct Printer;

impl AccordionDelegate<&'static str, &'static str> for Printer {
    fn on_parent_selected(&mut self, path: RowPath, item: &Item<&'static str, &'static str>) {
        println!("selected parent {} at row {}", item.value, path.row);
    }

    fn on_child_selected(
        &mut self,
        path: RowPath,
        parent: &Item<&'static str, &'static str>,
        child: &&'static str,
    ) {
        println!("selected {}/{child} at row {}", parent.value, path.row);
    }
}

fn render(b: &Binding<&'static str, &'static str>, view: &mut Terminal) {
    for row in 0..b.number_of_rows(0) {
        if let Some(line) = b.cell_for_row(view, &mut Lines, RowPath::new(0, row)) {
            println!("{row:>2} {line}");
        }
    }
}

fn main() {
    // Example: a multiple-mode accordion driving a 4-line terminal list.
    let model = DataModel::from_items([
        Item::with_children("src", ["lib.rs", "model.rs"]),
        Item::new("README.md"),
        Item::with_children("tests", ["a.rs", "b.rs", "c.rs"]),
    ]);
    let mut b = Binding::new(model, AccordionOptions::multiple());
    let mut view = Terminal {
        rows: b.number_of_rows(0),
        offset: 0,
        lines: 4,
    };
    render(&b, &mut view);

    for row in [0usize, 4, 6] {
        println!("\n> tap row {row}");
        b.did_select_row(&mut view, &mut Printer, RowPath::new(0, row));
        render(&b, &mut view);
    }
}
