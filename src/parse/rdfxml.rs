use oxrdf::NamedNode;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use std::fs;

use crate::model::{OntologyGraph, OntologySource};
use crate::parse::vocab::ns;
use crate::parse::{LoadError, OntologyParser};

/// Streaming RDF/XML parser that extracts the class hierarchy of an OWL
/// document: `owl:Class` declarations and `rdfs:subClassOf` edges, in
/// both the `rdf:resource` attribute form and the nested class-element
/// form. All other constructs (restrictions, property axioms,
/// annotations) are skipped without error.
pub struct RdfXmlClassParser;

/// Open elements the extraction cares about. Every `Start` event pushes
/// exactly one frame; every `End` pops one.
enum Frame {
    Class(usize),
    SubClassOf,
    Other,
}

fn innermost_class(stack: &[Frame]) -> Option<usize> {
    stack.iter().rev().find_map(|frame| match frame {
        Frame::Class(idx) => Some(*idx),
        _ => None,
    })
}

/// Resolves an `rdf:about`/`rdf:resource`/`rdf:ID` reference against the
/// document base and validates the result as an absolute IRI.
fn resolve_reference(base: &str, reference: &str) -> Result<NamedNode, LoadError> {
    let absolute = if reference.contains("://") {
        reference.to_string()
    } else if let Some(fragment) = reference.strip_prefix('#') {
        format!("{}#{}", base, fragment)
    } else {
        // rdf:ID and bare names resolve as fragments of the base
        format!("{}#{}", base, reference)
    };
    NamedNode::new(absolute).map_err(|e| LoadError::Iri {
        iri: reference.to_string(),
        reason: e.to_string(),
    })
}

impl RdfXmlClassParser {
    /// Parses an RDF/XML document held in memory. `base_iri` anchors
    /// relative references; an `xml:base` attribute on the root element
    /// takes precedence.
    pub fn parse_str(&self, input: &str, base_iri: &str) -> Result<OntologyGraph, LoadError> {
        let mut reader = NsReader::from_str(input);
        let mut graph = OntologyGraph::new();
        let mut stack: Vec<Frame> = Vec::new();
        let mut base = strip_fragment(base_iri).to_string();
        let mut saw_rdf_root = false;

        loop {
            match reader
                .read_event()
                .map_err(|e| LoadError::Syntax(e.to_string()))?
            {
                Event::Start(e) => {
                    if !saw_rdf_root && is_element(&reader, &e, ns::RDF, b"RDF") {
                        saw_rdf_root = true;
                        if let Some(declared) = xml_base_attribute(&e)? {
                            base = strip_fragment(&declared).to_string();
                        }
                    }
                    let frame = self.enter_element(&reader, &e, &base, &mut graph, &stack)?;
                    stack.push(frame);
                }
                Event::Empty(e) => {
                    self.enter_element(&reader, &e, &base, &mut graph, &stack)?;
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !saw_rdf_root {
            return Err(LoadError::Syntax(
                "document has no rdf:RDF root element".to_string(),
            ));
        }
        Ok(graph)
    }

    /// Classifies one opening element and applies its effect on the graph.
    fn enter_element(
        &self,
        reader: &NsReader<&[u8]>,
        e: &BytesStart,
        base: &str,
        graph: &mut OntologyGraph,
        stack: &[Frame],
    ) -> Result<Frame, LoadError> {
        if is_element(reader, e, ns::OWL, b"Class") {
            let Some(reference) = rdf_attribute(reader, e, &[b"about", b"ID"])? else {
                // anonymous class expression, nothing to index
                return Ok(Frame::Other);
            };
            let idx = graph.intern(resolve_reference(base, &reference)?);
            // a class element directly inside rdfs:subClassOf names a
            // superclass of the enclosing class
            if matches!(stack.last(), Some(Frame::SubClassOf)) {
                if let Some(parent) = innermost_class(stack) {
                    graph.add_superclass(parent, idx);
                }
            }
            Ok(Frame::Class(idx))
        } else if is_element(reader, e, ns::RDFS, b"subClassOf") {
            if let Some(parent) = innermost_class(stack) {
                if let Some(reference) = rdf_attribute(reader, e, &[b"resource"])? {
                    let superclass = graph.intern(resolve_reference(base, &reference)?);
                    graph.add_superclass(parent, superclass);
                }
            }
            Ok(Frame::SubClassOf)
        } else {
            Ok(Frame::Other)
        }
    }
}

impl OntologyParser for RdfXmlClassParser {
    fn parse(&self, source: &OntologySource) -> Result<OntologyGraph, LoadError> {
        let input = fs::read_to_string(&source.path).map_err(|e| LoadError::Io {
            path: source.path.clone(),
            source: e,
        })?;
        let absolute = source
            .path
            .canonicalize()
            .unwrap_or_else(|_| source.path.clone());
        let base = format!("file://{}", absolute.display());
        self.parse_str(&input, &base)
    }
}

fn is_element(reader: &NsReader<&[u8]>, e: &BytesStart, namespace: &str, local: &[u8]) -> bool {
    let (resolved, local_name) = reader.resolve_element(e.name());
    matches!(resolved, ResolveResult::Bound(Namespace(n)) if n == namespace.as_bytes())
        && local_name.as_ref() == local
}

/// Finds the first rdf-namespaced attribute among `names` and returns its
/// unescaped value.
fn rdf_attribute(
    reader: &NsReader<&[u8]>,
    e: &BytesStart,
    names: &[&[u8]],
) -> Result<Option<String>, LoadError> {
    for attribute in e.attributes() {
        let attribute = attribute.map_err(|err| LoadError::Syntax(err.to_string()))?;
        let (resolved, local) = reader.resolve_attribute(attribute.key);
        let in_rdf_ns =
            matches!(resolved, ResolveResult::Bound(Namespace(n)) if n == ns::RDF.as_bytes());
        if in_rdf_ns && names.contains(&local.as_ref()) {
            let value = attribute
                .unescape_value()
                .map_err(|err| LoadError::Syntax(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// The `xml` prefix is reserved, so the attribute can be matched by its
/// qualified name directly.
fn xml_base_attribute(e: &BytesStart) -> Result<Option<String>, LoadError> {
    for attribute in e.attributes() {
        let attribute = attribute.map_err(|err| LoadError::Syntax(err.to_string()))?;
        if attribute.key.as_ref() == b"xml:base" {
            let value = attribute
                .unescape_value()
                .map_err(|err| LoadError::Syntax(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn strip_fragment(iri: &str) -> &str {
    iri.split('#').next().unwrap_or(iri)
}
