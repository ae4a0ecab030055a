//! The example handlers and their descriptor table.

use switchboard_core::{EventData, HandlerDescriptor};

/// Handlers in registration order.
pub const HANDLERS: &[HandlerDescriptor] = &[
    HandlerDescriptor::new("Foo", foo),
    HandlerDescriptor::new("Bar", bar),
    HandlerDescriptor::new("Qux", qux),
];

/// Formats the line a handler prints: `<name>() - <count>`.
pub fn line(name: &str, count: EventData) -> String {
    format!("{name}() - {count}")
}

/// Prints `Foo() - <count>`.
pub fn foo(data: &mut EventData) {
    println!("{}", line("Foo", *data));
}

/// Prints `Bar() - <count>`.
pub fn bar(data: &mut EventData) {
    println!("{}", line("Bar", *data));
}

/// Prints `Qux() - <count>`.
pub fn qux(data: &mut EventData) {
    println!("{}", line("Qux", *data));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format() {
        assert_eq!(line("Foo", 1), "Foo() - 1");
        assert_eq!(line("Qux", 12), "Qux() - 12");
    }

    #[test]
    fn table_order() {
        let names: Vec<_> = HANDLERS.iter().map(|descriptor| descriptor.name).collect();
        assert_eq!(names, ["Foo", "Bar", "Qux"]);
    }
}
