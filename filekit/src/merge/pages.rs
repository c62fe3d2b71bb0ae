//! Page tree manipulation for appending one document to another.

use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashSet;

use crate::error::{FilekitError, Result};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Append every page of `doc` to the end of `merged`.
///
/// Object ids of `doc` are shifted past `merged`'s, the pages are hung
/// directly under `merged`'s root page node, and attributes they used to
/// inherit from their old parents are copied onto the pages themselves.
/// Attributes the new parent carries but the page never had are pinned to
/// their defaults so the page does not pick them up.
///
/// Returns the number of pages appended.
pub fn append_document(merged: &mut Document, mut doc: Document) -> Result<usize> {
    doc.renumber_objects_with(merged.max_id + 1);

    let root_pages_id = pages_root(merged)?;
    let root_keys: Vec<&[u8]> = merged
        .get_dictionary(root_pages_id)
        .map(|root| INHERITABLE.into_iter().filter(|key| root.has(key)).collect())
        .unwrap_or_default();
    let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();

    for &page_id in &page_ids {
        let inherited = inherited_attributes(&doc, page_id);
        let page = doc
            .get_dictionary_mut(page_id)
            .map_err(|e| FilekitError::unknown(format!("Page {page_id:?} is unreadable: {e}")))?;

        for (key, value) in inherited {
            if !page.has(&key) {
                page.set(key, value);
            }
        }
        for &key in &root_keys {
            if !page.has(key)
                && let Some(value) = attribute_default(page, key)
            {
                page.set(key, value);
            }
        }
        page.set("Parent", root_pages_id);
    }

    merged.max_id = merged.max_id.max(doc.max_id);
    merged.objects.extend(doc.objects);
    add_pages_to_tree(merged, root_pages_id, &page_ids)?;

    Ok(page_ids.len())
}

/// Drop objects orphaned by appending and renumber the result.
pub fn tidy(merged: &mut Document) {
    let pruned = merged.prune_objects();
    tracing::debug!(pruned = pruned.len(), "pruned unreferenced objects");
    merged.renumber_objects();
}

fn pages_root(doc: &Document) -> Result<ObjectId> {
    doc.catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|e| FilekitError::unknown(format!("Failed to get pages reference: {e}")))
}

/// Collect inheritable attributes from the ancestors of `page_id`,
/// nearest ancestor first.
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(Vec<u8>, Object)> {
    let mut found: Vec<(Vec<u8>, Object)> = Vec::new();
    let mut visited = HashSet::new();

    let mut parent = doc
        .get_dictionary(page_id)
        .and_then(|page| page.get(b"Parent"))
        .and_then(Object::as_reference)
        .ok();

    while let Some(node_id) = parent {
        if !visited.insert(node_id) {
            break;
        }
        let Ok(node) = doc.get_dictionary(node_id) else {
            break;
        };

        for key in INHERITABLE {
            if found.iter().all(|(k, _)| k.as_slice() != key)
                && let Ok(value) = node.get(key)
            {
                found.push((key.to_vec(), value.clone()));
            }
        }

        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    found
}

/// Value equivalent to `key` being absent from `page` and all its ancestors.
fn attribute_default(page: &Dictionary, key: &[u8]) -> Option<Object> {
    match key {
        b"Rotate" => Some(Object::Integer(0)),
        b"CropBox" => page.get(b"MediaBox").ok().cloned(),
        b"Resources" => Some(Object::Dictionary(Dictionary::new())),
        _ => None,
    }
}

fn add_pages_to_tree(merged: &mut Document, pages_id: ObjectId, page_ids: &[ObjectId]) -> Result<()> {
    let dict = merged
        .get_dictionary_mut(pages_id)
        .map_err(|e| FilekitError::unknown(format!("Failed to get pages object: {e}")))?;

    let Ok(Object::Array(kids)) = dict.get_mut(b"Kids") else {
        return Err(FilekitError::unknown("Pages dictionary missing Kids array"));
    };
    kids.extend(page_ids.iter().map(|&id| Object::Reference(id)));

    let current_count = dict.get(b"Count").and_then(Object::as_i64).unwrap_or(0);
    dict.set("Count", current_count + page_ids.len() as i64);

    Ok(())
}
