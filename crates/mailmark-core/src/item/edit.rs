use std::sync::Arc;

use super::{Item, Link};

/// Copy-on-write editor for an item in a batch.
///
/// Reads go to the shared original until the first change, which clones
/// it once. [`ItemEdit::finish`] hands back the original `Arc` when nothing
/// changed, so untouched items are never reallocated.
pub struct ItemEdit<'a> {
    original: &'a Arc<Item>,
    edited: Option<Item>,
}

impl<'a> ItemEdit<'a> {
    pub fn new(original: &'a Arc<Item>) -> Self {
        ItemEdit {
            original,
            edited: None,
        }
    }

    /// The item as it currently reads, edits included
    pub fn current(&self) -> &Item {
        match &self.edited {
            Some(item) => item,
            None => self.original.as_ref(),
        }
    }

    fn make_mut(&mut self) -> &mut Item {
        let original = self.original;
        self.edited.get_or_insert_with(|| Item::clone(original))
    }

    pub fn set_content(&mut self, content: String) -> bool {
        if self.current().content == content {
            return false;
        }
        self.make_mut().content = content;
        true
    }

    pub fn set_title(&mut self, title: String) -> bool {
        if self.current().title == title {
            return false;
        }
        self.make_mut().title = title;
        true
    }

    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.current().has_tag(tag) {
            return false;
        }
        self.make_mut().add_tag(tag)
    }

    pub fn set_links(&mut self, links: Vec<Link>) -> bool {
        if self.current().links == links {
            return false;
        }
        self.make_mut().links = links;
        true
    }

    pub fn set_metadata(&mut self, key: &str, value: serde_json::Value) -> bool {
        if self.current().metadata.extra.get(key) == Some(&value) {
            return false;
        }
        self.make_mut().metadata.extra.insert(key.to_string(), value);
        true
    }

    pub fn is_changed(&self) -> bool {
        self.edited.is_some()
    }

    /// The original `Arc` when unchanged, a freshly owned item otherwise
    pub fn finish(self) -> Arc<Item> {
        match self.edited {
            Some(item) => Arc::new(item),
            None => Arc::clone(self.original),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemType;

    fn shared(content: &str) -> Arc<Item> {
        Item::new("m1", ItemType::Email)
            .with_content(content)
            .into_shared()
    }

    #[test]
    fn test_unchanged_edit_returns_same_allocation() {
        let item = shared("hello");
        let mut edit = ItemEdit::new(&item);
        assert!(!edit.set_content("hello".to_string()));
        assert!(!edit.is_changed());

        let out = edit.finish();
        assert!(Arc::ptr_eq(&item, &out));
    }

    #[test]
    fn test_changed_edit_leaves_original_alone() {
        let item = shared("<b>hello</b>");
        let mut edit = ItemEdit::new(&item);
        assert!(edit.set_content("**hello**".to_string()));
        assert!(edit.add_tag("cleaned"));
        assert_eq!(edit.current().content, "**hello**");

        let out = edit.finish();
        assert!(!Arc::ptr_eq(&item, &out));
        assert_eq!(item.content, "<b>hello</b>");
        assert!(item.tags.is_empty());
        assert_eq!(out.tags, vec!["cleaned"]);
    }

    #[test]
    fn test_repeated_writes_clone_once() {
        let item = shared("a");
        let mut edit = ItemEdit::new(&item);
        edit.set_content("b".to_string());
        edit.set_title("T".to_string());
        edit.set_metadata("signature", serde_json::json!("--\nAnn"));
        assert!(!edit.set_metadata("signature", serde_json::json!("--\nAnn")));

        let out = edit.finish();
        assert_eq!(out.content, "b");
        assert_eq!(out.title, "T");
        assert_eq!(
            out.metadata.extra.get("signature"),
            Some(&serde_json::json!("--\nAnn"))
        );
    }
}
