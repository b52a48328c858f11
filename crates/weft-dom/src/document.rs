//! Document assembly
//!
//! A document exclusively owns one head and one body, plus the
//! deferred client-side procedures. Rendering is pure: the companion
//! script is synthesized on every call and never appended to the
//! stored body, so repeated renders return identical output instead of
//! accumulating script nodes.

use crate::category::Container;
use crate::kinds::{Body, Header, MetadataLeaf, Plain};
use crate::node::{Markup, Text};
use crate::script::{self, ClientHandle, Procedure};
use crate::serializer::{self, DATA_ID_ATTR};
use crate::uid;

/// An HTML document with pre-seeded charset and title metadata.
pub struct Document {
    title: String,
    charset: String,
    lang: String,
    head: Header,
    body: Body,
    procedures: Vec<Procedure>,
    script_uid: String,
}

impl Document {
    /// Create a document with `utf-8` charset and English lang.
    pub fn new(title: &str) -> Self {
        Self::with_charset_lang(title, "utf-8", "en")
    }

    /// Create a document with explicit charset and language.
    pub fn with_charset_lang(title: &str, charset: &str, lang: &str) -> Self {
        let head = Header::new()
            .append(MetadataLeaf::new("meta").attr("charset", charset))
            .append(Plain::new("title").append(Text::pcdata(title)));
        Self {
            title: title.to_string(),
            charset: charset.to_string(),
            lang: lang.to_string(),
            head,
            body: Body::new(),
            procedures: Vec::new(),
            script_uid: uid::data_id("script"),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn head(&self) -> &Header {
        &self.head
    }

    pub fn head_mut(&mut self) -> &mut Header {
        &mut self.head
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Queue a client-side procedure, emitted after the lookup table.
    pub fn defer(&mut self, procedure: Procedure) -> &mut Self {
        self.procedures.push(procedure);
        self
    }

    /// Handles of every colorized node across head and body.
    pub fn client_handles(&self) -> Vec<ClientHandle> {
        self.gathered()
            .into_iter()
            .filter(ClientHandle::is_colored)
            .collect()
    }

    /// Union of the head's and body's referenced-sets, deduplicated.
    fn gathered(&self) -> Vec<ClientHandle> {
        let mut handles = self.head.referenced();
        for handle in self.body.referenced() {
            if !handles.iter().any(|known| known.uid() == handle.uid()) {
                handles.push(handle);
            }
        }
        handles
    }

    /// Serialize the whole document.
    ///
    /// Emits the doctype, the head, and the body with the generated
    /// companion script as its final child. Pure: calling this twice
    /// yields byte-identical output.
    pub fn render(&self) -> String {
        let handles = self.gathered();
        tracing::debug!(
            "rendering document {:?}: {} client binding(s), {} procedure(s)",
            self.title,
            handles.iter().filter(|handle| handle.is_colored()).count(),
            self.procedures.len()
        );
        let bindings = script::render_bindings(&handles, &self.procedures);

        let mut out = String::new();
        out.push_str("<!doctype html>");
        out.push_str("<html lang=\"");
        out.push_str(&self.lang);
        out.push_str("\">");
        serializer::write_element(self.head.element(), &mut out);
        serializer::write_open_tag(self.body.element(), &mut out);
        serializer::write_children(self.body.element(), &mut out);
        out.push_str("<script ");
        out.push_str(DATA_ID_ATTR);
        out.push_str("=\"");
        out.push_str(&self.script_uid);
        out.push_str("\">");
        out.push_str(&bindings);
        out.push_str("</script>");
        serializer::write_close_tag(self.body.element(), &mut out);
        out.push_str("</html>");
        out
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
