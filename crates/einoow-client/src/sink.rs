use einoow_core::metadata::{MetaSlot, MetadataSink, SlotTag};
use web_sys::Document;

use crate::diag;
use crate::dom::JsResult;

/// Writes metadata slots into the live document `<head>`.
pub struct DomMetadataSink {
    document: Document,
}

impl DomMetadataSink {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn try_upsert(&self, slot: MetaSlot, value: &str) -> JsResult<()> {
        let tag = match slot.tag() {
            SlotTag::Title => {
                self.document.set_title(value);
                return Ok(());
            },
            SlotTag::Meta => "meta",
            SlotTag::Link => "link",
        };

        if let Some(existing) = self.document.query_selector(&slot.selector())? {
            existing.set_attribute(slot.value_attr(), value)?;
            return Ok(());
        }

        let head = self
            .document
            .head()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("document has no <head>"))?;
        let node = self.document.create_element(tag)?;
        let (key, name) = slot.key();
        node.set_attribute(key, name)?;
        node.set_attribute(slot.value_attr(), value)?;
        head.append_child(&node)?;
        Ok(())
    }
}

impl MetadataSink for DomMetadataSink {
    fn upsert(&mut self, slot: MetaSlot, value: &str) {
        if let Err(e) = self.try_upsert(slot, value) {
            diag::console_warn!("metadata: failed to write {}: {e:?}", slot.selector());
        }
    }
}
