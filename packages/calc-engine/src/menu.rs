use crate::interaction::UserInteraction;
use crate::registry::{OperationRegistry, QUIT_KEY};

/// Menu lines below the heading: one `key) name` per operation in ascending
/// key order, then the quit entry.
pub fn menu_lines(ops: &OperationRegistry) -> Vec<String> {
    ops.values()
        .map(|op| format!("{}) {}", op.key, op.name))
        .chain(std::iter::once(format!("{QUIT_KEY}) Quit")))
        .collect()
}

pub fn print_menu<U>(ui: &U, ops: &OperationRegistry, title: &str)
where
    U: UserInteraction + ?Sized,
{
    ui.show_heading(title);
    for line in menu_lines(ops) {
        ui.show_line(&line);
    }
}
