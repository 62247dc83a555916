//! The built-in collection shown when no catalog file is given.

use super::{Catalog, CatalogError, Category, Exhibit, Position, TraversalSetting};

/// Builds the built-in catalog.
///
/// # Errors
///
/// Only fails if the table below gains a duplicate id.
pub fn builtin_catalog(setting: TraversalSetting) -> Result<Catalog, CatalogError> {
    Catalog::new(builtin_categories(), builtin_exhibits(), setting)
}

fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new(
            "elegant-functions",
            "Elegant Functions",
            "A collection of beautifully crafted functions",
            Position::new(20.0, 30.0),
        )
        .with_first_exhibit("foo-bar"),
        Category::new(
            "creative-algorithms",
            "Creative Algorithms",
            "Algorithms that showcase creative problem-solving",
            Position::new(65.0, 20.0),
        )
        .with_first_exhibit("fibonacci-one-liner"),
        Category::new(
            "historical-snippets",
            "Historical Snippets",
            "Code that changed the course of programming history",
            Position::new(40.0, 70.0),
        )
        .with_first_exhibit("hello-world"),
        Category::new(
            "minimal-wonders",
            "Minimal Wonders",
            "Achieving a lot with very little code",
            Position::new(75.0, 60.0),
        )
        .with_first_exhibit("life-in-a-line"),
    ]
}

fn builtin_exhibits() -> Vec<Exhibit> {
    vec![
        Exhibit::new(
            "foo-bar",
            "Foo Bar: A Brilliantly Useless Function",
            "elegant-functions",
        )
        .with_code(
            r#"def foo():
    return "bar"  # Pure genius"#,
            "python",
        )
        .with_description(
            "This function does nothing, but in the most sophisticated way possible.",
        )
        .with_next("map-filter-reduce")
        .with_position(Position::new(30.0, 40.0)),
        Exhibit::new("map-filter-reduce", "The Functional Trio", "elegant-functions")
            .with_code(
                r#"// Map: Double each number
const doubled = [1, 2, 3].map(x => x * 2);

// Filter: Keep only even numbers
const evens = [1, 2, 3, 4].filter(x => x % 2 === 0);

// Reduce: Sum all numbers
const sum = [1, 2, 3, 4].reduce((acc, x) => acc + x, 0);"#,
                "javascript",
            )
            .with_description("The three fundamental operations of functional programming.")
            .with_position(Position::new(60.0, 35.0)),
        Exhibit::new(
            "fibonacci-one-liner",
            "Fibonacci: The One-liner",
            "creative-algorithms",
        )
        .with_code(
            "const fibonacci = n => n <= 1 ? n : fibonacci(n - 1) + fibonacci(n - 2);",
            "javascript",
        )
        .with_description("An elegant recursive implementation of the Fibonacci sequence.")
        .with_next("quicksort")
        .with_position(Position::new(45.0, 25.0)),
        Exhibit::new(
            "quicksort",
            "Quicksort: The Elegant Sorting Algorithm",
            "creative-algorithms",
        )
        .with_code(
            // The indented blank lines are part of the exhibit.
            concat!(
                "quicksort = (arr) => {\n",
                "  if (arr.length <= 1) return arr;\n",
                "  \n",
                "  const pivot = arr[0];\n",
                "  const left = arr.slice(1).filter(x => x < pivot);\n",
                "  const right = arr.slice(1).filter(x => x >= pivot);\n",
                "  \n",
                "  return [...quicksort(left), pivot, ...quicksort(right)];\n",
                "};",
            ),
            "javascript",
        )
        .with_description("A concise and elegant implementation of the quicksort algorithm.")
        .with_position(Position::new(70.0, 35.0)),
        Exhibit::new(
            "hello-world",
            "The Original Hello World",
            "historical-snippets",
        )
        .with_code(
            r#"#include <stdio.h>

int main() {
    printf("hello, world\n");
    return 0;
}"#,
            "c",
        )
        .with_description(
            "The program that introduced generations of programmers to the craft.",
        )
        .with_position(Position::new(30.0, 60.0)),
        Exhibit::new(
            "life-in-a-line",
            "Conway's Game of Life in One Line",
            "minimal-wonders",
        )
        .with_code(
            "life=lambda b,s:set([(i+(i in b)*s.count(i)*(4-s.count(i))/3)%2 for i in s])",
            "python",
        )
        .with_description("Conway's Game of Life implemented in a single line of Python.")
        .with_position(Position::new(65.0, 70.0)),
    ]
}

// ============================================================================
// Tests
// ============================================================================
