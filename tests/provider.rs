//! End-to-end extraction over fixture pages in the generated-reference
//! layout, loaded from disk the way a real deployment would.

use docscrape::{DirLoader, DocProvider, OperationDescriptor, TypeDescriptor};
use std::sync::Arc;
use std::thread;

fn fixture_root() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn modern_provider() -> DocProvider {
    DocProvider::new(Box::new(DirLoader::new(fixture_root())))
}

// -- modern layout --

#[test]
fn class_summary_from_page() {
    let provider = modern_provider();
    let widget = TypeDescriptor::new("org.example.Widget");
    assert_eq!(
        provider.class_doc(&widget).as_deref(),
        Some("A widget that spins.")
    );
}

#[test]
fn zero_parameter_method() {
    let provider = modern_provider();
    let widget = TypeDescriptor::new("org.example.Widget");
    let spin = OperationDescriptor::new("spin", vec![]);
    assert_eq!(
        provider.method_doc(&widget, &spin).as_deref(),
        Some("Spins the widget once.")
    );
    assert_eq!(
        provider.method_response_doc(&widget, &spin).as_deref(),
        Some("the widget, for chaining.")
    );
    // spin has no Parameters: section of its own; render's belongs to render
    assert!(provider.method_param_doc(&widget, &spin, 0).is_none());
}

#[test]
fn two_parameter_method() {
    let provider = modern_provider();
    let widget = TypeDescriptor::new("org.example.Widget");
    let render = OperationDescriptor::new(
        "render",
        vec!["java.lang.String".into(), "int".into()],
    );
    assert_eq!(
        provider.method_doc(&widget, &render).as_deref(),
        Some("Renders the widget as text.")
    );
    assert_eq!(
        provider.method_param_doc(&widget, &render, 0).as_deref(),
        Some("the render style name.")
    );
    assert_eq!(
        provider.method_param_doc(&widget, &render, 1).as_deref(),
        Some("target width in columns.")
    );
    assert!(provider.method_param_doc(&widget, &render, 2).is_none());
    assert_eq!(
        provider.method_response_doc(&widget, &render).as_deref(),
        Some("the rendered form.")
    );
}

#[test]
fn arity_mismatch_is_absent() {
    let provider = modern_provider();
    let widget = TypeDescriptor::new("org.example.Widget");
    let spin_int = OperationDescriptor::new("spin", vec!["int".into()]);
    assert!(provider.method_doc(&widget, &spin_int).is_none());
    let render_one = OperationDescriptor::new("render", vec!["java.lang.String".into()]);
    assert!(provider.method_doc(&widget, &render_one).is_none());
}

#[test]
fn unknown_class_is_absent() {
    let provider = modern_provider();
    let nowhere = TypeDescriptor::new("org.example.Missing");
    assert!(provider.class_doc(&nowhere).is_none());
    let op = OperationDescriptor::new("spin", vec![]);
    assert!(provider.method_doc(&nowhere, &op).is_none());
}

// -- legacy layout --

#[test]
fn legacy_page_with_legacy_dialect() {
    let provider = DocProvider::with_generator_version(
        Box::new(DirLoader::new(fixture_root())),
        "1.6.0_45",
    );
    let widget = TypeDescriptor::new("org.example.LegacyWidget");
    let spin = OperationDescriptor::new("spin", vec!["int".into()]);
    assert_eq!(
        provider.class_doc(&widget).as_deref(),
        Some("An old-style widget.")
    );
    assert_eq!(
        provider.method_doc(&widget, &spin).as_deref(),
        Some("Spins the legacy widget.")
    );
    assert_eq!(
        provider.method_param_doc(&widget, &spin, 0).as_deref(),
        Some("rotations per second.")
    );
    assert_eq!(
        provider.method_response_doc(&widget, &spin).as_deref(),
        Some("nothing at all.")
    );
}

#[test]
fn legacy_page_with_modern_dialect_finds_nothing() {
    // The page exists and the class heading matches, but every marker is
    // upper-case, so each field degrades to absence.
    let provider = modern_provider();
    let widget = TypeDescriptor::new("org.example.LegacyWidget");
    assert!(provider.class_doc(&widget).is_none());
    let spin = OperationDescriptor::new("spin", vec!["int".into()]);
    assert!(provider.method_doc(&widget, &spin).is_none());
}

// -- documented-type resolution --

#[test]
fn documentation_follows_marked_interface() {
    let provider = modern_provider();
    let mut store = TypeDescriptor::new("org.example.Store");
    store.is_interface = true;
    store.has_route_marker = true;
    // The concrete class has no page of its own and no marker; its marked
    // interface carries the documentation.
    let mut impl_class = TypeDescriptor::new("org.example.StoreImpl");
    impl_class.interfaces = vec![store];
    assert_eq!(
        provider.class_doc(&impl_class).as_deref(),
        Some("Storage for widgets.")
    );
    let put = OperationDescriptor::new("put", vec!["org.example.Widget".into()]);
    assert_eq!(
        provider.method_doc(&impl_class, &put).as_deref(),
        Some("Stores one widget.")
    );
}

// -- concurrency --

#[test]
fn racing_readers_agree() {
    let provider = Arc::new(modern_provider());
    let widget = TypeDescriptor::new("org.example.Widget");
    let spin = OperationDescriptor::new("spin", vec![]);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let provider = Arc::clone(&provider);
            let widget = widget.clone();
            let spin = spin.clone();
            thread::spawn(move || {
                (
                    provider.class_doc(&widget),
                    provider.method_doc(&widget, &spin),
                )
            })
        })
        .collect();

    for handle in handles {
        let (class_doc, method_doc) = handle.join().unwrap();
        assert_eq!(class_doc.as_deref(), Some("A widget that spins."));
        assert_eq!(method_doc.as_deref(), Some("Spins the widget once."));
    }
}
