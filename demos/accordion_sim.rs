use accordion::translator::for_each_row;
use accordion::{Accordion, AccordionOptions, DataModel, Item, RowKind, Section};

fn print_rows(a: &Accordion<&'static str, &'static str>) {
    for section in 0..a.number_of_sections() {
        println!("[{}]", a.model().header_title(section).unwrap_or("-"));
        for_each_row(a.model(), section, |kind| match kind {
            RowKind::Parent { parent } => {
                if let Some(item) = a.model().item(section, parent) {
                    let mark = if item.is_expanded() { "v" } else { ">" };
                    println!("  {mark} {}", item.value);
                }
            }
            RowKind::Child { parent, child } => {
                if let Some(c) = a
                    .model()
                    .item(section, parent)
                    .and_then(|it| it.children.get(child))
                {
                    println!("      {c}");
                }
            }
        });
    }
}

fn main() {
    // Example: single-mode accordion. Tapping a parent collapses whichever parent was open.
    let model = DataModel::from_sections([
        Section::new([
            Item::with_children("Fruits", ["apple", "pear"]),
            Item::new("Nuts"),
            Item::with_children("Berries", ["cherry", "plum", "sloe"]),
        ])
        .with_header("Pantry"),
    ]);
    let mut a = Accordion::new(model, AccordionOptions::single());
    print_rows(&a);

    for row in [0usize, 4, 2] {
        let Some(t) = a.tap(0, row) else {
            println!("tap row {row}: no change");
            continue;
        };
        println!(
            "tap row {row}: {:?} scroll_to={:?}",
            t.mutations, t.scroll_to
        );
        print_rows(&a);
    }
}
