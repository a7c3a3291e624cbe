// Example: one million fixed-height rows recycled through a pool of 200 nodes.
use smart_table_scroll::{ScrollableTable, Surface, TableOptions, UpdateOutcome};

const COLORS: [&str; 7] = ["red", "orange", "yellow", "green", "blue", "indigo", "violet"];

struct Row {
    index: usize,
    color: &'static str,
    random: u32,
}

#[derive(Debug)]
struct Cell {
    text: String,
    top: u64,
}

/// A stand-in for a scroll container: it just counts DOM-like mutations.
#[derive(Default)]
struct Container {
    scroll_top: u64,
    mounted: usize,
}

impl Surface for Container {
    type Node = Cell;

    fn add_class(&mut self, _class: &str) {}

    fn clear(&mut self) {
        self.mounted = 0;
    }

    fn append(&mut self, _node: &Cell) {
        self.mounted += 1;
    }

    fn remove(&mut self, _node: &Cell) {
        self.mounted -= 1;
    }

    fn set_top(&mut self, node: &mut Cell, top: u64) {
        node.top = top;
    }

    fn add_node_class(&mut self, _node: &mut Cell, _class: &str) {}

    fn create_anchor(&mut self) -> Cell {
        Cell {
            text: String::new(),
            top: 0,
        }
    }

    fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    fn client_height(&self) -> u32 {
        600
    }
}

fn render(row: &Row) -> String {
    format!("{:>7} {:<6} {:>3}", row.index, row.color, row.random)
}

fn main() {
    let data = (0..1_000_000usize)
        .map(|index| Row {
            index,
            color: COLORS[index % COLORS.len()],
            random: (index as u32).wrapping_mul(2654435761) % 100 + 1,
        })
        .collect::<Vec<_>>();

    let mut table = ScrollableTable::new(
        TableOptions::new()
            .with_container(Container::default())
            .with_data(data)
            .with_fixed_height(17)
            .with_available_nodes(200)
            .with_build_row(|row: &Row| Cell {
                text: render(row),
                top: 0,
            })
            .with_update_row(|row, cell| cell.text = render(row)),
    )
    .expect("all required options are set");

    println!("total_height={}", table.total_height());
    println!("mounted={}", table.surface().mounted);

    for scroll_top in [0, 17 * 150, 8_499_700, 16_999_400] {
        table.surface_mut().scroll_top = scroll_top;
        let outcome = table.update_visible_rows();
        let rebound = match outcome {
            UpdateOutcome::Updated { rebound } => rebound,
            _ => 0,
        };
        let window = table.fill_window().unwrap_or_default();
        let mid = table.last_mid_index().unwrap_or_default();
        println!(
            "scroll_top={scroll_top} mid={mid} window={}..{} rebound={rebound}",
            window.start, window.end
        );
        if let Some(cell) = table.node_for_row(mid) {
            println!("  row under midpoint: {:?}", cell);
        }
    }
}
