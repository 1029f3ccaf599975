//! Log node rendering tests

use std::sync::Arc;

use adminlog::*;
use pretty_assertions::assert_eq;

fn sample_entries() -> Vec<LogEntry> {
    (1..=10)
        .map(|id| {
            let user_id = if id % 2 == 0 { 7 } else { 42 };
            LogEntry::new(id, user_id, ActionKind::Change, format!("article #{}", id))
        })
        .collect()
}

fn context_with_source() -> RenderContext {
    let mut context = RenderContext::new();
    context.bind(
        LOG_ENTRIES_KEY,
        Value::source(MemoryLogSource::new(sample_entries())),
    );
    context
}

fn compile(text: &str) -> Box<dyn RenderNode> {
    TagRegistry::with_builtins().compile(text).unwrap()
}

fn bound_ids(context: &RenderContext, name: &str) -> Vec<u64> {
    context
        .get(name)
        .and_then(|v| v.as_entries())
        .expect("varname should hold entries")
        .iter()
        .map(|entry| entry.id)
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Unfiltered Rendering
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_render_binds_first_limit_entries() {
    let node = compile("{% get_admin_log 5 as entries %}");
    let mut context = context_with_source();

    let output = node.render(&mut context).unwrap();

    assert_eq!(output, "");
    assert_eq!(bound_ids(&context, "entries"), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_render_limit_exceeding_collection() {
    let node = compile("{% get_admin_log 50 as entries %}");
    let mut context = context_with_source();

    node.render(&mut context).unwrap();

    assert_eq!(bound_ids(&context, "entries").len(), 10);
}

#[test]
fn test_render_zero_limit_binds_empty() {
    let node = compile("{% get_admin_log 0 as entries %}");
    let mut context = context_with_source();

    node.render(&mut context).unwrap();

    assert!(bound_ids(&context, "entries").is_empty());
}

#[test]
fn test_render_preserves_source_order() {
    let node = compile("{% get_admin_log 10 as entries %}");
    let mut context = context_with_source();

    node.render(&mut context).unwrap();

    let ids = bound_ids(&context, "entries");
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted); // Source happened to be ordered; no reorder.
}

// ═══════════════════════════════════════════════════════════════════════
// User Filtering
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_render_filters_by_literal_user_id() {
    let node = compile("{% get_admin_log 3 as entries for_user 7 %}");
    let mut context = context_with_source();

    node.render(&mut context).unwrap();

    assert_eq!(bound_ids(&context, "entries"), vec![2, 4, 6]);
}

#[test]
fn test_render_filters_by_user_variable() {
    let node = compile("{% get_admin_log 3 as entries for_user requesting_user %}");
    let mut context = context_with_source();
    context.bind("requesting_user", Value::user(UserRecord::new(42, "alice")));

    node.render(&mut context).unwrap();

    assert_eq!(bound_ids(&context, "entries"), vec![1, 3, 5]);
}

#[test]
fn test_render_trailing_for_user_is_unfiltered() {
    let node = compile("{% get_admin_log 10 as entries for_user %}");
    let mut context = context_with_source();

    node.render(&mut context).unwrap();

    assert_eq!(bound_ids(&context, "entries").len(), 10);
}

#[test]
fn test_render_filter_with_no_matches_binds_empty() {
    let node = compile("{% get_admin_log 5 as entries for_user 999 %}");
    let mut context = context_with_source();

    node.render(&mut context).unwrap();

    assert!(bound_ids(&context, "entries").is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Error Propagation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_render_missing_user_variable_raises() {
    let node = compile("{% get_admin_log 3 as entries for_user requesting_user %}");
    let mut context = context_with_source();

    let err = node.render(&mut context).unwrap_err();

    assert_eq!(
        err,
        RenderError::UndefinedVariable {
            name: "requesting_user".to_string()
        }
    );
    // Not silently bound to anything.
    assert!(!context.contains("entries"));
}

#[test]
fn test_render_user_variable_of_wrong_kind_raises() {
    let node = compile("{% get_admin_log 3 as entries for_user requesting_user %}");
    let mut context = context_with_source();
    context.bind("requesting_user", Value::Int(42));

    let err = node.render(&mut context).unwrap_err();

    assert_eq!(
        err,
        RenderError::TypeError {
            expected: "User".to_string(),
            got: "i64".to_string()
        }
    );
}

#[test]
fn test_render_without_source_binding_raises() {
    let node = compile("{% get_admin_log 3 as entries %}");
    let mut context = RenderContext::new();

    let err = node.render(&mut context).unwrap_err();

    assert_eq!(
        err,
        RenderError::UndefinedVariable {
            name: LOG_ENTRIES_KEY.to_string()
        }
    );
}

#[test]
fn test_render_source_binding_of_wrong_kind_raises() {
    let node = compile("{% get_admin_log 3 as entries %}");
    let mut context = RenderContext::new();
    context.bind(LOG_ENTRIES_KEY, Value::string("not a source"));

    let err = node.render(&mut context).unwrap_err();

    assert_eq!(
        err,
        RenderError::TypeError {
            expected: "LogSource".to_string(),
            got: "String".to_string()
        }
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Repeated and Concurrent Renders
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_render_is_idempotent_across_contexts() {
    let node = compile("{% get_admin_log 4 as entries for_user 7 %}");

    let mut first = context_with_source();
    let mut second = context_with_source();
    node.render(&mut first).unwrap();
    node.render(&mut second).unwrap();

    assert_eq!(bound_ids(&first, "entries"), bound_ids(&second, "entries"));
}

#[test]
fn test_render_twice_into_same_context_rebinds() {
    let node = compile("{% get_admin_log 4 as entries %}");
    let mut context = context_with_source();

    node.render(&mut context).unwrap();
    let first = bound_ids(&context, "entries");
    node.render(&mut context).unwrap();

    assert_eq!(bound_ids(&context, "entries"), first);
    assert_eq!(context.len(), 2); // source + one result binding
}

#[test]
fn test_render_concurrently_against_independent_contexts() {
    let node: Arc<dyn RenderNode> = Arc::new(
        parse_admin_log(
            &Token::new("get_admin_log 5 as entries for_user 7").split_contents(),
        )
        .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let node = Arc::clone(&node);
            std::thread::spawn(move || {
                let mut context = context_with_source();
                node.render(&mut context).unwrap();
                bound_ids(&context, "entries")
            })
        })
        .collect();

    let results: Vec<Vec<u64>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.iter().all(|ids| *ids == vec![2, 4, 6, 8, 10]));
}

// ═══════════════════════════════════════════════════════════════════════
// Context Configuration
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_render_reads_configured_source_key() {
    let node = compile("{% get_admin_log 2 as entries %}");
    let mut context = RenderContext::new().with_source_key("audit_trail");
    context.bind(
        "audit_trail",
        Value::source(MemoryLogSource::new(sample_entries())),
    );

    node.render(&mut context).unwrap();

    assert_eq!(bound_ids(&context, "entries"), vec![1, 2]);
}
