// Example: replacing the dataset reuses nodes and detaches the excess.
use smart_table_scroll::{ScrollableTable, SharedTable, Surface, TableOptions};

#[derive(Default)]
struct Container {
    scroll_top: u64,
    children: Vec<u32>,
    next_id: u32,
}

#[derive(Debug)]
struct Node {
    id: u32,
    label: u64,
    top: u64,
}

impl Surface for Container {
    type Node = Node;

    fn add_class(&mut self, class: &str) {
        println!("container class: {class}");
    }

    fn clear(&mut self) {
        self.children.clear();
    }

    fn append(&mut self, node: &Node) {
        self.children.push(node.id);
    }

    fn remove(&mut self, node: &Node) {
        self.children.retain(|&id| id != node.id);
    }

    fn set_top(&mut self, node: &mut Node, top: u64) {
        node.top = top;
    }

    fn add_node_class(&mut self, _node: &mut Node, _class: &str) {}

    fn create_anchor(&mut self) -> Node {
        self.next_id += 1;
        Node {
            id: u32::MAX - self.next_id,
            label: 0,
            top: 0,
        }
    }

    fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    fn client_height(&self) -> u32 {
        300
    }
}

fn main() {
    use std::sync::atomic::{AtomicU32, Ordering};

    let next_id = AtomicU32::new(0);
    let table = ScrollableTable::new(
        TableOptions::new()
            .with_container(Container::default())
            .with_data((0..1000u64).collect::<Vec<_>>())
            .with_available_nodes(200)
            .with_build_row(move |row: &u64| Node {
                id: next_id.fetch_add(1, Ordering::Relaxed),
                label: *row,
                top: 0,
            })
            .with_update_row(|row, node| node.label = *row),
    )
    .expect("all required options are set");
    let table = SharedTable::new(table);

    table.with_mut(|t| t.surface_mut().scroll_top = 4_000);
    println!("scroll: {:?}", table.on_scroll());
    table.with(|t| println!("before: children={}", t.surface().children.len()));

    println!("update_data: {:?}", table.update_data((0..50).map(|i| i * 10).collect()));
    table.with(|t| {
        println!(
            "after: children={} bound={} total_height={}",
            t.surface().children.len(),
            t.bound_count(),
            t.total_height()
        );
        for (row, node) in t.bound_nodes().take(3) {
            println!("  row {row}: {node:?}");
        }
    });
}
