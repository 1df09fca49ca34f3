//! Streaming parser for the road-network export format.
//!
//! # Document shape
//!
//! ```xml
//! <osm>
//!   <node id="A" lat="35.23" lon="139.90"/>
//!   <node id="B">
//!     <tag k="local_x" v="111320"/>
//!     <tag k="local_y" v="0"/>
//!   </node>
//!   <way>
//!     <nd ref="A"/>
//!     <nd ref="B"/>
//!   </way>
//! </osm>
//! ```
//!
//! Both self-closing (`Empty`) and open/close (`Start`/`End`) element forms
//! occur in real exports; the parser accepts either.  Unknown elements and
//! attributes are skipped.  A `node` without an `id` attribute is skipped.
//! A `lat`/`lon` attribute that is present but not a finite number is treated
//! as absent — resolution decides later whether the local-metric tags can
//! stand in.  Only malformed XML fails the whole document.

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use rustc_hash::FxHashMap;

use crate::{IngestError, IngestResult};

// ── Raw document model ────────────────────────────────────────────────────────

/// One `node` element, exactly as the document stated it.
///
/// Lives only for the duration of one ingestion pass; resolution converts it
/// into a table entry or drops it.
#[derive(Debug, Clone)]
pub struct RawNode {
    pub id:   String,
    pub lat:  Option<f64>,
    pub lon:  Option<f64>,
    pub tags: FxHashMap<String, String>,
}

/// One `way` element: the ordered node-id references it listed.
#[derive(Debug, Clone, Default)]
pub struct RawWay {
    pub refs: Vec<String>,
}

/// A parsed source document, still unresolved.
#[derive(Debug, Clone, Default)]
pub struct RawDocument {
    pub nodes: Vec<RawNode>,
    pub ways:  Vec<RawWay>,
}

// ── Parser ────────────────────────────────────────────────────────────────────

/// Parse a source document.
///
/// # Errors
///
/// Returns [`IngestError::Xml`] / [`IngestError::Attr`] when the document is
/// not well-formed XML, and [`IngestError::Parse`] when it contains no XML
/// elements at all (an empty body, or plain text that is not a document).
/// Individually broken nodes never fail the pass.
pub fn parse_document(text: &str) -> IngestResult<RawDocument> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut doc = RawDocument::default();
    let mut saw_element = false;
    // Element currently being filled with child `tag`/`nd` elements, if any.
    let mut node: Option<RawNode> = None;
    let mut way:  Option<RawWay>  = None;

    loop {
        match reader.read_event()? {
            Event::Start(el) => {
                saw_element = true;
                match el.name().as_ref() {
                    b"node" => node = node_from_attrs(&el)?,
                    b"way"  => way = Some(RawWay::default()),
                    b"tag" => {
                        if let (Some(n), Some((k, v))) = (node.as_mut(), key_value(&el)?) {
                            n.tags.insert(k, v);
                        }
                    }
                    b"nd" => {
                        if let (Some(w), Some(r)) = (way.as_mut(), node_ref(&el)?) {
                            w.refs.push(r);
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(el) => {
                saw_element = true;
                match el.name().as_ref() {
                    b"node" => doc.nodes.extend(node_from_attrs(&el)?),
                    b"way"  => doc.ways.push(RawWay::default()),
                    b"tag" => {
                        if let (Some(n), Some((k, v))) = (node.as_mut(), key_value(&el)?) {
                            n.tags.insert(k, v);
                        }
                    }
                    b"nd" => {
                        if let (Some(w), Some(r)) = (way.as_mut(), node_ref(&el)?) {
                            w.refs.push(r);
                        }
                    }
                    _ => {}
                }
            }
            Event::End(el) => match el.name().as_ref() {
                b"node" => doc.nodes.extend(node.take()),
                b"way"  => doc.ways.extend(way.take()),
                _ => {}
            },
            Event::Eof => break,
            // Declaration, comments, whitespace text — nothing to keep.
            _ => {}
        }
    }

    if !saw_element {
        return Err(IngestError::Parse("document contains no elements".to_string()));
    }

    debug!(
        "parsed document: {} node elements, {} way elements",
        doc.nodes.len(),
        doc.ways.len()
    );
    Ok(doc)
}

// ── Element helpers ───────────────────────────────────────────────────────────

/// Read a `node` element's attributes.  `None` when it carries no `id`.
fn node_from_attrs(el: &BytesStart<'_>) -> IngestResult<Option<RawNode>> {
    let mut id:  Option<String> = None;
    let mut lat: Option<f64>    = None;
    let mut lon: Option<f64>    = None;

    for attr in el.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"id"  => id = Some(attr.unescape_value()?.into_owned()),
            b"lat" => lat = parse_coord(&attr.unescape_value()?),
            b"lon" => lon = parse_coord(&attr.unescape_value()?),
            // version, visible, timestamp, … — irrelevant here.
            _ => {}
        }
    }

    let Some(id) = id else {
        debug!("skipping node element without id attribute");
        return Ok(None);
    };
    Ok(Some(RawNode { id, lat, lon, tags: FxHashMap::default() }))
}

/// Read a `tag` element's `k`/`v` pair.  `None` when either is missing.
fn key_value(el: &BytesStart<'_>) -> IngestResult<Option<(String, String)>> {
    let mut k: Option<String> = None;
    let mut v: Option<String> = None;

    for attr in el.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"k" => k = Some(attr.unescape_value()?.into_owned()),
            b"v" => v = Some(attr.unescape_value()?.into_owned()),
            _ => {}
        }
    }
    Ok(k.zip(v))
}

/// Read an `nd` element's `ref` attribute.
fn node_ref(el: &BytesStart<'_>) -> IngestResult<Option<String>> {
    for attr in el.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"ref" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Parse a coordinate string, rejecting non-finite values.
pub(crate) fn parse_coord(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
