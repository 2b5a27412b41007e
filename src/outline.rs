use crate::error::Result;
use crate::layout::Bookmark;
use crate::page::Page;
use crate::refs::{ObjectReferences, RefType};
use pdf_writer::{Finish, Pdf, Ref, TextStr};

/// A bookmark and the indices of the bookmarks nested below it
#[derive(Debug)]
struct OutlineNode {
    index: usize,
    children: Vec<usize>,
}

/// The document outline: top-level headings with their sub-headings nested below
#[derive(Debug)]
pub(crate) struct Outline<'a> {
    entries: &'a [Bookmark],
    roots: Vec<OutlineNode>,
}

impl<'a> Outline<'a> {
    /// Sub-headings hang off the closest preceding top-level heading. Those with no
    /// top-level heading before them sit at the top level themselves.
    pub fn new(entries: &'a [Bookmark]) -> Outline<'a> {
        let mut roots: Vec<OutlineNode> = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            match roots.last_mut() {
                Some(parent) if entry.level > 1 && entries[parent.index].level == 1 => {
                    parent.children.push(index)
                }
                _ => roots.push(OutlineNode {
                    index,
                    children: Vec::new(),
                }),
            }
        }
        Outline { entries, roots }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the outline root and all its items, returning the root's reference
    pub fn write(
        &self,
        refs: &mut ObjectReferences,
        pages: &[Page],
        writer: &mut Pdf,
    ) -> Result<Ref> {
        // generate IDs for everything up front, items link to their siblings
        let outlines_id = refs.gen(RefType::Outlines);
        for index in 0..self.entries.len() {
            refs.gen(RefType::OutlineEntry(index));
        }
        let entry_ref = |index: usize| refs.require(RefType::OutlineEntry(index));

        let mut outline = writer.outline(outlines_id);
        if let (Some(first), Some(last)) = (self.roots.first(), self.roots.last()) {
            outline.first(entry_ref(first.index)?);
            outline.last(entry_ref(last.index)?);
        }
        outline.count(self.entries.len() as i32);
        outline.finish();

        let root_indices: Vec<usize> = self.roots.iter().map(|n| n.index).collect();
        for node in self.roots.iter() {
            self.write_item(node.index, &root_indices, outlines_id, &node.children, refs, pages, writer)?;
            let parent = entry_ref(node.index)?;
            for &child in node.children.iter() {
                self.write_item(child, &node.children, parent, &[], refs, pages, writer)?;
            }
        }

        Ok(outlines_id)
    }

    #[allow(clippy::too_many_arguments)]
    fn write_item(
        &self,
        index: usize,
        siblings: &[usize],
        parent: Ref,
        children: &[usize],
        refs: &ObjectReferences,
        pages: &[Page],
        writer: &mut Pdf,
    ) -> Result<()> {
        let entry = &self.entries[index];
        let position = siblings.iter().position(|&s| s == index).unwrap_or(0);

        let mut item = writer.outline_item(refs.require(RefType::OutlineEntry(index))?);
        item.parent(parent);
        item.title(TextStr(entry.title.as_str()));
        if position > 0 {
            item.prev(refs.require(RefType::OutlineEntry(siblings[position - 1]))?);
        }
        if let Some(&next) = siblings.get(position + 1) {
            item.next(refs.require(RefType::OutlineEntry(next))?);
        }
        if let (Some(&first), Some(&last)) = (children.first(), children.last()) {
            item.first(refs.require(RefType::OutlineEntry(first))?);
            item.last(refs.require(RefType::OutlineEntry(last))?);
            item.count(children.len() as i32);
        }

        // scroll so the top of the heading's first line is at the top of the window
        let page_ref = refs.require(RefType::Page(entry.page_index))?;
        let top = pages
            .get(entry.page_index)
            .map(|page| *(page.height() - entry.baseline + entry.size))
            .unwrap_or_default();
        item.dest().page(page_ref).fit_horizontal(top);

        Ok(())
    }
}
