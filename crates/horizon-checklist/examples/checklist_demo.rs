//! Check list demo.
//!
//! Builds a list of ten items, simulates a few clicks the way a view would
//! forward them, then prints the state of every item.
//!
//! Run with `RUST_LOG=horizon_checklist=trace` to see model notifications.

use std::sync::Arc;

use horizon_checklist::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CheckListError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let model = Arc::new(CheckListModel::<String>::new());
    let list = CheckList::new(model.clone());

    list.selection_changed().connect(|value| {
        if let Some(item) = value {
            println!("toggled: {item}");
        }
    });

    for i in 0..10 {
        model.add_item(format!("Item {i}"))?;
    }

    // Rows resolved by the view's hit-test; `None` is a click below the last row.
    for row in [Some(2), Some(5), None, Some(7), Some(5)] {
        list.handle_click(row)?;
    }

    for index in 0..model.size() {
        if model.is_checked(index)? {
            println!("Item {index} is checked");
        } else {
            println!("Item {index} is unchecked");
        }
    }

    Ok(())
}
