use serde_json::Value;

/// Deep-merges `sources` into `target`, left to right. Object values merge
/// key-wise; everything else overwrites. Non-object sources are skipped, as
/// is a non-object target.
pub fn merge(target: &mut Value, sources: &[Value]) {
    for source in sources {
        merge_one(target, source);
    }
}

fn merge_one(target: &mut Value, source: &Value) {
    let source = match source.as_object() {
        Some(map) => map,
        None => return,
    };
    let target = match target.as_object_mut() {
        Some(map) => map,
        None => return,
    };

    for (key, value) in source {
        if value.is_object() {
            let slot = target
                .entry(key.clone())
                .or_insert_with(|| Value::Object(Default::default()));
            merge_one(slot, value);
        } else {
            target.insert(key.clone(), value.clone());
        }
    }
}

/// First element whose `"name"` field equals `name`.
pub fn find_by_name<'a>(collection: &'a [Value], name: &str) -> Option<&'a Value> {
    collection
        .iter()
        .find(|entry| entry.get("name").and_then(Value::as_str) == Some(name))
}

/// Swaps the first two elements in place. Shorter slices are left untouched.
pub fn swap<T>(items: &mut [T]) {
    swap_at(items, 0, 1);
}

pub fn swap_at<T>(items: &mut [T], first: usize, second: usize) {
    if first < items.len() && second < items.len() {
        items.swap(first, second);
    }
}
